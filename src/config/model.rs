//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::vocab::Direction;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the word list is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Save the list even when it is empty, so deleting the last word sticks.
    #[serde(default = "default_true")]
    pub persist_empty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            persist_empty: true,
        }
    }
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub default_direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long success/error notifications stay on screen.
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_secs: default_notification_secs(),
        }
    }
}

/// Diagnostic logging settings. The terminal belongs to the UI, so logs
/// always go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// An `EnvFilter` directive such as `info` or `flashcards=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Relative paths are resolved against the data directory.
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_notification_secs() -> u64 {
    3
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> String {
    "flashcards.log".to_string()
}
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashcards")
}
