//! Storage module for configuration and progress history.

pub mod config;
pub mod progress;

pub use config::{load_config, AppConfig, ConfigError, PlanSettings, ReportSettings, StorageSettings};
pub use progress::{ProgressLog, ProgressRecord, ProgressStore, StorageError};
