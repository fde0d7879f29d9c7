//! Runtime configuration for the desktop shell.
//!
//! Settings come from `ROOST_*` environment variables (optionally loaded from
//! a `.env` file by the binary). Parsing is kept free of process state so it
//! can be tested with plain key/value pairs.

use crate::error::{Error, Result};
use crate::models::{Settings, ThemeMode};
use crate::util::normalize_text_option;

pub const ENV_THEME: &str = "ROOST_THEME";
pub const ENV_FONT_SIZE: &str = "ROOST_FONT_SIZE";
pub const ENV_CLOCK_24H: &str = "ROOST_CLOCK_24H";
pub const ENV_USER_NAME: &str = "ROOST_USER_NAME";
pub const ENV_PRIORITY_CONFIG: &str = "ROOST_PRIORITY_CONFIG";

const MIN_FONT_SIZE: u32 = 8;
const MAX_FONT_SIZE: u32 = 48;

impl Settings {
    /// Build settings from environment-style key/value pairs.
    ///
    /// Unknown keys are ignored, blank values keep the default, and invalid
    /// values are reported as [`Error::Config`].
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();

        for (key, value) in vars {
            let Some(value) = normalize_text_option(Some(value.as_ref())) else {
                continue;
            };

            match key.as_ref() {
                ENV_THEME => settings.theme = value.parse::<ThemeMode>()?,
                ENV_FONT_SIZE => settings.font_size = parse_font_size(&value)?,
                ENV_CLOCK_24H => settings.clock_24h = parse_bool(ENV_CLOCK_24H, &value)?,
                ENV_USER_NAME => settings.user_display_name = value,
                ENV_PRIORITY_CONFIG => settings.priority_config = Some(value.into()),
                _ => {}
            }
        }

        Ok(settings)
    }

    /// Read settings from the current process environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_vars(std::env::vars())
    }
}

fn parse_font_size(value: &str) -> Result<u32> {
    let size: u32 = value
        .parse()
        .map_err(|_| Error::Config(format!("{ENV_FONT_SIZE} must be a number, got {value:?}")))?;
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
        return Err(Error::Config(format!(
            "{ENV_FONT_SIZE} must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}, got {size}"
        )));
    }
    Ok(size)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_environment_yields_defaults() {
        let settings = Settings::from_env_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_all_known_keys() {
        let settings = Settings::from_env_vars([
            (ENV_THEME, "dark"),
            (ENV_FONT_SIZE, "16"),
            (ENV_CLOCK_24H, "no"),
            (ENV_USER_NAME, "  Ada  "),
            (ENV_PRIORITY_CONFIG, "/etc/roost/priorities.json"),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                theme: ThemeMode::Dark,
                font_size: 16,
                clock_24h: false,
                user_display_name: "Ada".to_string(),
                priority_config: Some("/etc/roost/priorities.json".into()),
            }
        );
    }

    #[test]
    fn blank_values_keep_defaults() {
        let settings = Settings::from_env_vars([(ENV_USER_NAME, "   ")]).unwrap();
        assert_eq!(settings.user_display_name, "You");

        let settings = Settings::from_env_vars([(ENV_PRIORITY_CONFIG, "")]).unwrap();
        assert_eq!(settings.priority_config, None);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Settings::from_env_vars([(ENV_FONT_SIZE, "huge")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Settings::from_env_vars([(ENV_FONT_SIZE, "200")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Settings::from_env_vars([(ENV_CLOCK_24H, "maybe")]),
            Err(Error::Config(_))
        ));
    }
}
