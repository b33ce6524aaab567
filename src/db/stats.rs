use crate::db::pool::DbPool;
use crate::db::queries::open_sessions;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, user: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        pool.path.display(),
        RESET
    );
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;
    let users: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT user_id) FROM time_entries",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total entries:{} {}{}{} ({} user(s))",
        CYAN, RESET, GREEN, count, RESET, users
    );

    //
    // 3) DATE RANGE (current user)
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries WHERE user_id = ?1 ORDER BY date ASC LIMIT 1",
            [user],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries WHERE user_id = ?1 ORDER BY date DESC LIMIT 1",
            [user],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range for '{}':{}", CYAN, user, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/DAY
    //
    if let (Some(f), Some(l)) = (first_date, last_date)
        && let (Some(d1), Some(d2)) = (parse_date(&f), parse_date(&l))
    {
        let days = (d2 - d1).num_days().max(1);
        let user_count: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM time_entries WHERE user_id = ?1",
            [user],
            |row| row.get(0),
        )?;

        let avg = user_count as f64 / days as f64;
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    //
    // 5) OPEN SESSIONS
    //
    let open = open_sessions(&pool.conn, user)?;
    if open.is_empty() {
        println!("{}• Open sessions:{} {}none{}", CYAN, RESET, GREEN, RESET);
    } else {
        println!("{}• Open sessions:{}", CYAN, RESET);
        for (date, n) in open {
            println!("    {}{}{}: {}", RED, date, RESET, n);
        }
    }

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}
