//! Diagnostic logging to disk.
//!
//! The TUI owns stdout, so the `tracing` subscriber writes to a log file
//! (default: `<data dir>/flashcards.log`). Disabled logging installs no
//! subscriber at all and every `tracing` macro becomes a no-op.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Resolve the log file path; relative paths live under `data_dir`.
pub fn log_path(config: &LoggingConfig, data_dir: &Path) -> PathBuf {
    let file = Path::new(&config.file);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}

/// Install the global subscriber. Returns the log file path when logging is
/// enabled.
pub fn init(config: &LoggingConfig, data_dir: &Path) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_path(config, data_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_log_file_lives_in_data_dir() {
        let cfg = LoggingConfig::default();
        assert_eq!(
            log_path(&cfg, Path::new("/data/flashcards")),
            PathBuf::from("/data/flashcards/flashcards.log")
        );
    }

    #[test]
    fn test_absolute_log_file_is_kept() {
        let cfg = LoggingConfig {
            file: "/var/log/cards.log".into(),
            ..LoggingConfig::default()
        };
        assert_eq!(log_path(&cfg, Path::new("/data")), PathBuf::from("/var/log/cards.log"));
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        assert!(init(&cfg, dir.path()).unwrap().is_none());
        assert!(!dir.path().join("flashcards.log").exists());
    }
}
