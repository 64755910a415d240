// ABOUTME: Light/dark mode types and the persisted theme preference
// ABOUTME: ThemePreference mirrors the "app-theme" value written by the theme provider

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concrete appearance a preset is applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Invalid theme mode: {other}. Must be one of: light, dark")),
        }
    }
}

/// Theme selection as stored under the "app-theme" key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow system appearance
    #[default]
    System,
}

impl ThemePreference {
    /// Parse a stored preference. Unknown values are treated as `System`.
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Resolve to a concrete mode. Anything that is not explicitly dark
    /// renders as light.
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::Light | ThemePreference::System => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
