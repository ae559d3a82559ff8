//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SwipeError, SwipeResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gesture tracker settings.
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tracker behaviour that is not part of the telemetry computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Start with the console echo of every telemetry record enabled.
    #[serde(default)]
    pub verbose_echo: bool,

    /// Optional JSONL file that receives every published record.
    #[serde(default)]
    pub telemetry_output: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "swipe_gesture_tracker=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from a path, falling back to defaults on any problem.
    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from a path the user named explicitly.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is
    /// an error rather than being silently ignored.
    pub fn load_strict(config_path: &Path) -> SwipeResult<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            SwipeError::config(format!("Invalid config at {}: {e}", config_path.display()))
        })
    }

    /// Save config to a path.
    pub fn save_to(&self, config_path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("swipe").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.tracker.verbose_echo);
        assert!(config.tracker.telemetry_output.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"tracker":{"verbose_echo":true}}"#).unwrap();
        assert!(config.tracker.verbose_echo);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("swipe_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("config.json");

        let mut config = AppConfig::default();
        config.tracker.verbose_echo = true;
        config.logging.level = "debug".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert!(loaded.tracker.verbose_echo);
        assert_eq!(loaded.logging.level, "debug");
        assert!(AppConfig::load_strict(&path).unwrap().tracker.verbose_echo);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("swipe_test_config_invalid");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let loaded = AppConfig::load_from(&path);
        assert!(!loaded.tracker.verbose_echo);

        let err = AppConfig::load_strict(&path).unwrap_err();
        assert!(matches!(err, SwipeError::Config { .. }));
        assert!(err.to_string().starts_with("Configuration error: Invalid config at"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_strict_load_of_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join("swipe_test_config_missing")
            .join("config.json");
        let loaded = AppConfig::load_strict(&path).unwrap();
        assert!(!loaded.tracker.verbose_echo);
        assert_eq!(loaded.logging.level, "info");
    }
}
