//! Application settings model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" | "auto" => Ok(Self::System),
            other => Err(Error::Config(format!("unknown theme mode: {other}"))),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Theme mode
    pub theme: ThemeMode,
    /// Base font size in pixels
    pub font_size: u32,
    /// Show message times as 24h (`14:05`) instead of 12h (`2:05 PM`)
    pub clock_24h: bool,
    /// Display name of the local user
    pub user_display_name: String,
    /// JSON file with a custom priority table
    #[serde(default)]
    pub priority_config: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            font_size: 14,
            clock_24h: true,
            user_display_name: "You".to_string(),
            priority_config: None,
        }
    }
}
