//! Time utilities: parsing HH:MM input and rendering instants as wall-clock.

use crate::errors::{AppError, AppResult};
use crate::utils::zone::Zone;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Combine an optional `HH:MM` argument with `date` in `zone`.
pub fn parse_optional_instant(
    input: Option<&str>,
    date: NaiveDate,
    zone: Zone,
) -> AppResult<Option<DateTime<Utc>>> {
    match input {
        Some(s) => {
            let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok(Some(zone.at(date, t)?))
        }
        None => Ok(None),
    }
}

/// Parse the RFC 3339 instant given to `--now`.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(format!("{s} (expected RFC 3339)")))
}

/// `HH:MM` of `instant` in `zone`, prefixed with `MM-DD` when the instant
/// does not fall on `day`.
pub fn format_clock(instant: DateTime<Utc>, zone: Zone, day: NaiveDate) -> String {
    let time = zone.time_of(instant).format("%H:%M");
    let date = zone.date_of(instant);
    if date == day {
        time.to_string()
    } else {
        format!("{} {}", date.format("%m-%d"), time)
    }
}
