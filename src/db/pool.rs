//! SQLite connection wrapper (one connection per CLI invocation).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
    pub path: PathBuf,
}

impl DbPool {
    pub fn new(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        // a second writer waits for the day it wants instead of failing at once
        conn.busy_timeout(Duration::from_secs(5))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
