// ABOUTME: TOML configuration for the tinct binary
// ABOUTME: Where the style root and preferences live, and theme defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tinct_core::{MAX_RADIUS_PX, MIN_RADIUS_PX, SemanticPolicy};
use tinct_types::ThemePreference;

pub const CONFIG_FILE_NAME: &str = "tinct.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TinctConfig {
    pub paths: PathsConfig,
    pub theme: ThemeConfig,
}

/// Files the binary reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// JSON file holding token overrides
    pub style_root: PathBuf,
    /// JSON file holding app-theme, app-radius and app-color-preset
    pub preferences: PathBuf,
    /// Stylesheet whose `:root` block supplies token defaults. The built-in
    /// stylesheet is used when unset.
    pub stylesheet: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            style_root: default_data_file("style-root.json"),
            preferences: default_data_file("preferences.json"),
            stylesheet: None,
        }
    }
}

fn default_data_file(name: &str) -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tinct")
        .join(name)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Used when no app-theme preference has been stored
    pub mode: ThemePreference,
    /// Radius in pixels declared when the stylesheet has no `--radius`
    #[serde(default = "default_radius")]
    pub default_radius: f64,
    /// How the default preset treats semantic colors
    pub semantic_policy: SemanticPolicy,
}

fn default_radius() -> f64 {
    10.0
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemePreference::System,
            default_radius: default_radius(),
            semantic_policy: SemanticPolicy::default(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.default_radius.is_finite() {
            return Err("default_radius must be a number".to_string());
        }
        if !(MIN_RADIUS_PX..=MAX_RADIUS_PX).contains(&self.default_radius) {
            return Err(format!(
                "default_radius must be between {MIN_RADIUS_PX} and {MAX_RADIUS_PX} pixels"
            ));
        }
        Ok(())
    }

    /// A copy with out-of-range values replaced
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if !config.default_radius.is_finite() {
            tinct_logging::warn!("Invalid default_radius, using 10px");
            config.default_radius = default_radius();
        } else if !(MIN_RADIUS_PX..=MAX_RADIUS_PX).contains(&config.default_radius) {
            let clamped = config.default_radius.clamp(MIN_RADIUS_PX, MAX_RADIUS_PX);
            tinct_logging::warn!(
                original_radius = config.default_radius,
                clamped_radius = clamped,
                "default_radius out of range, clamping"
            );
            config.default_radius = clamped;
        }

        config
    }
}

impl TinctConfig {
    /// Default location: `<config dir>/tinct/tinct.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tinct").join(CONFIG_FILE_NAME))
    }

    /// Load `explicit`, or the default location when it is `None`.
    ///
    /// An explicit file must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tinct_logging::info!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::load_from_file(&path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        tinct_logging::info!(config_path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: TinctConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Err(message) = config.theme.validate() {
            tinct_logging::warn!(error = %message, "Invalid theme configuration");
        }

        Ok(config.sanitized())
    }

    pub fn sanitized(&self) -> Self {
        Self {
            paths: self.paths.clone(),
            theme: self.theme.sanitized(),
        }
    }
}
