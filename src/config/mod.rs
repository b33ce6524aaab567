use crate::core::calculator::average::DEFAULT_MONTHLY_AVERAGE_FROM_DAY;
use crate::errors::{AppError, AppResult};
use crate::store::StorageKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend used for daily logs.
    pub storage: StorageKind,
    /// SQLite database file (storage = sqlite).
    pub database: String,
    /// Root directory of the per-day JSON documents (storage = json).
    pub data_dir: String,
    /// Owner of the recorded entries.
    pub user: String,
    /// `local`, `UTC`, or a fixed offset like `+05:30`.
    pub timezone: String,
    pub monthly_average_from_day: u32,
    /// Diagnostic log level (overridden by `TIMEPORTAL_LOG`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            database: Self::database_file().to_string_lossy().to_string(),
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            user: "local".to_string(),
            timezone: "local".to_string(),
            monthly_average_from_day: DEFAULT_MONTHLY_AVERAGE_FROM_DAY,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeportal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timeportal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeportal.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeportal.sqlite")
    }

    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(1..=31).contains(&self.monthly_average_from_day) {
            return Err(AppError::Config(format!(
                "monthly_average_from_day must be between 1 and 31, got {}",
                self.monthly_average_from_day
            )));
        }
        if self.user.trim().is_empty() {
            return Err(AppError::Config("user must not be empty".into()));
        }
        Ok(())
    }

    /// Write the configuration file (unless `is_test`) and make sure the
    /// config directory exists. Returns the config file path.
    pub fn init_all(cfg: &Config, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !is_test {
            cfg.save_to(&path)?;
        }

        Ok(path)
    }
}
