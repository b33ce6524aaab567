//! SQLite backend for [`LogStore`].

use crate::db::initialize::init_db;
use crate::db::log::{load_log, ttlog};
use crate::db::pool::DbPool;
use crate::db::queries::{available_dates, load_day, replace_day};
use crate::errors::AppResult;
use crate::models::DailyLog;
use crate::models::audit::AuditRecord;
use crate::store::{DayEdit, LogStore, StorageKind};
use chrono::NaiveDate;
use rusqlite::TransactionBehavior;
use std::path::Path;

pub struct SqliteStore {
    pool: DbPool,
    user: String,
}

impl SqliteStore {
    /// Open (creating if needed) the database and apply pending migrations.
    pub fn open(path: &Path, user: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool,
            user: user.to_string(),
        })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl LogStore for SqliteStore {
    fn kind(&self) -> StorageKind {
        StorageKind::Sqlite
    }

    fn read(&mut self, date: NaiveDate) -> AppResult<DailyLog> {
        load_day(&self.pool.conn, &self.user, date)
    }

    fn write(&mut self, log: &DailyLog) -> AppResult<()> {
        let user = &self.user;
        let tx = self.pool.conn.transaction()?;
        replace_day(&tx, user, log)?;
        tx.commit()?;
        Ok(())
    }

    fn modify(&mut self, date: NaiveDate, edit: &mut DayEdit<'_>) -> AppResult<DailyLog> {
        let user = &self.user;
        // IMMEDIATE: the write lock is held from the first read.
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = load_day(&tx, user, date)?;
        let updated = edit(current)?;
        replace_day(&tx, user, &updated)?;

        tx.commit()?;
        Ok(updated)
    }

    fn available_dates(&mut self) -> AppResult<Vec<NaiveDate>> {
        available_dates(&self.pool.conn, &self.user)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }

    fn audit_trail(&mut self) -> AppResult<Vec<AuditRecord>> {
        load_log(&self.pool.conn)
    }
}
