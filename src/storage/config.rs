//! Application configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::athlete::DEFAULT_TOTAL_WEEKS;

/// Default name of the progress history file.
pub const DEFAULT_PROGRESS_FILE: &str = "breath_hold_progress.json";

/// Default number of blank note lines on each session page.
pub const DEFAULT_NOTES_LINES: usize = 8;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Planning settings
    pub plan: PlanSettings,
    /// Progress storage settings
    pub storage: StorageSettings,
    /// Report output settings
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            plan: PlanSettings::default(),
            storage: StorageSettings::default(),
            report: ReportSettings::default(),
        }
    }
}

/// Planning-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    /// Length of a training cycle in weeks
    pub total_weeks: u32,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            total_weeks: DEFAULT_TOTAL_WEEKS,
        }
    }
}

/// Progress storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Path of the JSON progress file
    pub progress_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            progress_file: PathBuf::from(DEFAULT_PROGRESS_FILE),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Directory that receives generated plans
    pub output_dir: PathBuf,
    /// Blank lines left for notes on each session page
    pub notes_lines: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            notes_lines: DEFAULT_NOTES_LINES,
        }
    }
}

/// Get the application configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "breathhold", "BreathHold")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load configuration from `path`, or from the default location.
///
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = path.map_or_else(get_config_path, Path::to_path_buf);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Loaded config");

    Ok(config)
}

/// Save configuration to `path`.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
