//! Versioned schema migrations.
//!
//! Each migration runs once; applying it writes a `migration_applied` row
//! into the `log` table, which is also how pending migrations are detected.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

pub struct Migration {
    pub version: &'static str,
    pub description: &'static str,
    sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250716_0001_create_time_entries",
        description: "Create time_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            date        TEXT NOT NULL,
            position    INTEGER NOT NULL,
            check_in    TEXT NOT NULL,
            check_out   TEXT,
            updated_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250802_0002_index_time_entries_by_day",
        description: "Index time_entries by user and day",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_time_entries_user_date_pos
            ON time_entries(user_id, date, position);
        "#,
    },
];

/// Ensure that the `log` table exists. It predates every migration.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql).map_err(|e| {
        AppError::Migration(format!("{} failed: {}", migration.version, e))
    })?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![migration.version, migration.description],
    )?;

    tx.commit()?;
    tracing::info!(version = migration.version, "migration applied");
    Ok(())
}

/// Versions not yet applied to this database, in order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations, returning how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }
    Ok(applied)
}
