use crate::core::ledger::DEFAULT_HISTORY_CAPACITY;
use crate::core::tracker::TrackerSettings;
use crate::errors::{AppError, AppResult};
use crate::utils::time::DEFAULT_MAX_BREAK_MINUTES;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_key_file")]
    pub key_file: String,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_max_break")]
    pub max_break_minutes: i64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_key_file() -> String {
    Config::key_file_path().to_string_lossy().to_string()
}
fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
fn default_max_break() -> i64 {
    DEFAULT_MAX_BREAK_MINUTES
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            key_file: default_key_file(),
            history_capacity: default_history_capacity(),
            max_break_minutes: default_max_break(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.sqlite")
    }

    pub fn key_file_path() -> PathBuf {
        Self::config_dir().join("rtimeclock.key")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Reject values the core cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.history_capacity == 0 {
            return Err("history_capacity must be at least 1".into());
        }
        if self.max_break_minutes < 0 {
            return Err("max_break_minutes must not be negative".into());
        }
        Ok(())
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            history_capacity: self.history_capacity,
            max_break_minutes: self.max_break_minutes,
        }
    }
}
