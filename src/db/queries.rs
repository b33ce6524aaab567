use crate::errors::{AppError, AppResult};
use crate::models::{DailyLog, TimeEntry};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, Row, params};

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_instant(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(raw.to_string())),
            )
        })
}

pub fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let check_in: String = row.get("check_in")?;
    let check_out: Option<String> = row.get("check_out")?;

    Ok(TimeEntry {
        check_in: parse_instant(0, &check_in)?,
        check_out: check_out
            .as_deref()
            .map(|raw| parse_instant(1, raw))
            .transpose()?,
    })
}

/// Entries of `user` on `date`, in insertion order.
pub fn load_day(conn: &Connection, user: &str, date: NaiveDate) -> AppResult<DailyLog> {
    let mut stmt = conn.prepare_cached(
        "SELECT check_in, check_out FROM time_entries
         WHERE user_id = ?1 AND date = ?2
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map(params![user, date_key(date)], map_row)?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(DailyLog::with_entries(date, entries))
}

/// Replace every stored entry of `user` on `log.date` with `log.entries`.
///
/// Run it inside a transaction: the delete and the inserts must land together.
pub fn replace_day(conn: &Connection, user: &str, log: &DailyLog) -> AppResult<()> {
    let key = date_key(log.date);
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "DELETE FROM time_entries WHERE user_id = ?1 AND date = ?2",
        params![user, key],
    )?;

    let mut insert = conn.prepare_cached(
        "INSERT INTO time_entries (user_id, date, position, check_in, check_out, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    for (position, entry) in log.entries.iter().enumerate() {
        insert.execute(params![
            user,
            key,
            position as i64,
            entry.check_in.to_rfc3339(),
            entry.check_out.map(|dt| dt.to_rfc3339()),
            now,
        ])?;
    }

    Ok(())
}

pub fn available_dates(conn: &Connection, user: &str) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare_cached(
        "SELECT DISTINCT date FROM time_entries WHERE user_id = ?1 ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([user], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let raw = r?;
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(raw.clone()))?;
        out.push(date);
    }
    Ok(out)
}

/// Open sessions per date for `user`, used to spot miss-punches in bulk.
pub fn open_sessions(conn: &Connection, user: &str) -> AppResult<Vec<(NaiveDate, i64)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, COUNT(*) FROM time_entries
         WHERE user_id = ?1 AND check_out IS NULL
         GROUP BY date ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([user], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (raw, count) = r?;
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(raw.clone()))?;
        out.push((date, count));
    }
    Ok(out)
}
