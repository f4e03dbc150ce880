use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::system::sampler::DEFAULT_PROCESS_LIMIT;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// How long each tick waits for a key before sampling again.
    pub refresh_rate_ms: u64,
    /// Rows in the process table.
    pub process_limit: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 500,
            process_limit: DEFAULT_PROCESS_LIMIT,
        }
    }
}

impl GeneralConfig {
    pub fn refresh_rate(&self) -> Duration {
        Duration::from_millis(self.refresh_rate_ms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; logging is off when unset since the dashboard owns stdout.
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            level: "info".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wintop").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
