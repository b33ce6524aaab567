use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, `today` or `yesterday`, relative to `today`.
pub fn resolve_date(s: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        _ => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.iter_days().take_while(|d| d.month() == month).collect(),
        None => Vec::new(),
    }
}

/// Monday to Sunday of the week containing `reference`.
pub fn week_of(reference: NaiveDate) -> Vec<NaiveDate> {
    let monday = reference.week(chrono::Weekday::Mon).first_day();
    monday.iter_days().take(7).collect()
}

pub fn month_of(reference: NaiveDate) -> Vec<NaiveDate> {
    all_days_of_month(reference.year(), reference.month())
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    all_days_of_month(year, month).last().copied()
}

fn parse_year(s: &str) -> AppResult<i32> {
    if s.len() != 4 {
        return Err(AppError::InvalidPeriod(s.to_string()));
    }
    s.parse()
        .map_err(|_| AppError::InvalidPeriod(s.to_string()))
}

/// First and last day covered by a single period token.
fn period_bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let token = token.trim();
    let invalid = || AppError::InvalidPeriod(token.to_string());

    match token.len() {
        // YYYY
        4 => {
            let y = parse_year(token)?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last = last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(token).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a period: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or two of the same
/// shape joined by `:` (e.g. `2025-06:2025-08`).
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match p.split_once(':') {
        Some((a, b)) => {
            if a.trim().len() != b.trim().len() {
                return Err(AppError::InvalidPeriod(format!(
                    "{p}: start and end must have the same format"
                )));
            }
            (period_bounds(a)?.0, period_bounds(b)?.1)
        }
        None => period_bounds(p)?,
    };

    if end < start {
        return Err(AppError::InvalidPeriod(format!("{p}: end is before start")));
    }
    Ok((start, end))
}
