//! Application configuration.
//!
//! Settings are read from `config.toml` in the platform config directory.
//! The file is optional and never written by the application.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI settings
    pub ui: UiSettings,
    /// Input form defaults
    pub form: FormSettings,
    /// Chart presentation settings
    pub chart: ChartSettings,
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Initial theme
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
}

/// Accepted range for `font_scale`.
pub const FONT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;

impl UiSettings {
    /// Zoom factor to apply, with `font_scale` brought into [`FONT_SCALE_RANGE`].
    ///
    /// A scale that is not a positive number falls back to 1.0.
    pub fn zoom_factor(&self) -> f32 {
        let scale = self.font_scale;
        if FONT_SCALE_RANGE.contains(&scale) {
            return scale;
        }

        let zoom = if scale.is_finite() && scale > 0.0 {
            scale.clamp(*FONT_SCALE_RANGE.start(), *FONT_SCALE_RANGE.end())
        } else {
            1.0
        };
        tracing::warn!("font_scale {} is out of range, using {}", scale, zoom);
        zoom
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_scale: 1.0,
        }
    }
}

/// Input form defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Number of point rows generated at startup
    pub default_points: usize,
    /// Pre-filled action name
    pub default_action_name: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            default_points: 3,
            default_action_name: String::new(),
        }
    }
}

/// Chart presentation settings. Axis ranges are fixed and not listed here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Chart height in points
    pub height: f32,
    /// Allow scroll/pinch zoom
    pub allow_zoom: bool,
    /// Allow drag panning
    pub allow_drag: bool,
    /// Show the series legend
    pub show_legend: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            height: 520.0,
            allow_zoom: false,
            allow_drag: false,
            show_legend: true,
        }
    }
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "lvprofile", "LvProfile")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`.
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
