//! Note priority and the lookup table used to render it

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Priority level of a note
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "normal" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(Error::InvalidInput(format!("unknown priority: {other}"))),
        }
    }
}

/// How a priority is drawn on a note card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityStyle {
    pub icon: String,
    pub color: String,
    pub label: String,
}

impl PriorityStyle {
    #[must_use]
    pub fn new(icon: &str, color: &str, label: &str) -> Self {
        Self {
            icon: icon.to_string(),
            color: color.to_string(),
            label: label.to_string(),
        }
    }

    /// Style used when the table has no entry for a priority
    #[must_use]
    pub fn neutral() -> Self {
        Self::new("•", "#9aa0a6", "No priority")
    }
}

/// Caller-supplied lookup table from priority to icon and colour.
///
/// Tables may be partial; [`PriorityConfig::resolve`] fills gaps with a
/// neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityConfig(BTreeMap<Priority, PriorityStyle>);

impl PriorityConfig {
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn with(mut self, priority: Priority, style: PriorityStyle) -> Self {
        self.0.insert(priority, style);
        self
    }

    /// Parse a table from JSON such as `{"high": {"icon": "!", ...}}`
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|error| Error::InvalidInput(format!("invalid priority config: {error}")))
    }

    #[must_use]
    pub fn get(&self, priority: Priority) -> Option<&PriorityStyle> {
        self.0.get(&priority)
    }

    #[must_use]
    pub fn resolve(&self, priority: Priority) -> PriorityStyle {
        self.get(priority).cloned().unwrap_or_else(PriorityStyle::neutral)
    }
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self::empty()
            .with(Priority::Low, PriorityStyle::new("↓", "#16a34a", "Low"))
            .with(Priority::Medium, PriorityStyle::new("→", "#2563eb", "Medium"))
            .with(Priority::High, PriorityStyle::new("↑", "#d97706", "High"))
            .with(Priority::Urgent, PriorityStyle::new("‼", "#dc2626", "Urgent"))
    }
}
