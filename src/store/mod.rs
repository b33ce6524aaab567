//! Storage interface for daily logs.
//!
//! A store persists whole days; it knows nothing about totals or statuses.
//! The backend is chosen once at startup from the configuration.

pub mod json_store;

use crate::config::Config;
use crate::db::sqlite_store::SqliteStore;
use crate::errors::AppResult;
use crate::models::DailyLog;
use crate::models::audit::AuditRecord;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use json_store::JsonFileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// One SQLite database for all days and users.
    #[default]
    Sqlite,
    /// One JSON document per day under the data directory.
    Json,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Sqlite => write!(f, "sqlite"),
            StorageKind::Json => write!(f, "json"),
        }
    }
}

/// Edit callback applied by [`LogStore::modify`].
pub type DayEdit<'a> = dyn FnMut(DailyLog) -> AppResult<DailyLog> + 'a;

pub trait LogStore {
    fn kind(&self) -> StorageKind;

    /// Entries recorded for `date`; an empty log when nothing is stored.
    /// Derived totals on the returned log are not meaningful.
    fn read(&mut self, date: NaiveDate) -> AppResult<DailyLog>;

    /// Persist `log` in full, replacing what was stored for its date.
    /// An empty log removes the day.
    fn write(&mut self, log: &DailyLog) -> AppResult<()>;

    /// Read, apply `edit`, write back, isolated from concurrent writers of
    /// the same day. Nothing is written when `edit` fails.
    fn modify(&mut self, date: NaiveDate, edit: &mut DayEdit<'_>) -> AppResult<DailyLog>;

    /// Dates that have at least one stored entry, ascending.
    fn available_dates(&mut self) -> AppResult<Vec<NaiveDate>>;

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;

    fn audit_trail(&mut self) -> AppResult<Vec<AuditRecord>>;

    fn read_many(&mut self, dates: &[NaiveDate]) -> AppResult<Vec<DailyLog>> {
        dates.iter().map(|d| self.read(*d)).collect()
    }
}

/// Open the backend selected in `cfg` for `user`.
pub fn open_store(cfg: &Config, user: &str) -> AppResult<Box<dyn LogStore>> {
    tracing::debug!(storage = %cfg.storage, user, "opening store");

    match cfg.storage {
        StorageKind::Sqlite => {
            let path = expand_tilde(&cfg.database);
            Ok(Box::new(SqliteStore::open(&path, user)?))
        }
        StorageKind::Json => {
            let dir = expand_tilde(&cfg.data_dir);
            Ok(Box::new(JsonFileStore::open(&dir, user)?))
        }
    }
}
