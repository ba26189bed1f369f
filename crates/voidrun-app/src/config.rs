//! Driver configuration, loaded from TOML and overridden from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use voidrun_sim::SimConfig;

/// Where mastered achievements are appended unless configured otherwise.
pub const DEFAULT_ACHIEVEMENT_FILE: &str = "achievements.log";

/// Wall-clock length of one tick in the interactive loop.
pub const DEFAULT_TICK_MILLIS: u64 = 250;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub tick_millis: u64,
    /// Stop after this many ticks. `None` runs until game over or shutdown.
    pub max_ticks: Option<u64>,
    pub achievement_file: PathBuf,
    /// `log` level filter name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_millis: DEFAULT_TICK_MILLIS,
            max_ticks: None,
            achievement_file: PathBuf::from(DEFAULT_ACHIEVEMENT_FILE),
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Tick length, never zero.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }

    pub fn log_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::Parse(format!("unknown log level '{}'", self.log_level)))
    }
}
