//! Time zone used to map stored UTC instants onto calendar days.
//!
//! Instants are always persisted as UTC. A `Zone` is the single place where
//! a wall-clock reading (date + HH:MM) becomes an instant and where an
//! instant becomes "a day". Nothing else truncates timestamps into dates.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The zone of the machine running the binary.
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Accepts `local`, `utc`/`Z`, or an offset like `+05:30`, `-0400`, `+02`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();
        let invalid = || AppError::InvalidTimezone(raw.to_string());

        if raw.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if raw.eq_ignore_ascii_case("utc") || raw == "Z" {
            return Ok(Zone::utc());
        }

        let (sign, rest) = match raw.chars().next() {
            Some('+') => (1, &raw[1..]),
            Some('-') => (-1, &raw[1..]),
            _ => return Err(invalid()),
        };

        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (hours, minutes): (i32, i32) = match digits.len() {
            2 => (digits.parse().map_err(|_| invalid())?, 0),
            4 => (
                digits[0..2].parse().map_err(|_| invalid())?,
                digits[2..4].parse().map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };

        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid)
    }

    /// Calendar day on which `instant` falls in this zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Zone::Local => instant.with_timezone(&Local).date_naive(),
            Zone::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    /// Wall-clock time of `instant` in this zone.
    pub fn time_of(&self, instant: DateTime<Utc>) -> NaiveTime {
        match self {
            Zone::Local => instant.with_timezone(&Local).time(),
            Zone::Fixed(offset) => instant.with_timezone(offset).time(),
        }
    }

    /// Instant for the wall-clock reading `date time` in this zone.
    ///
    /// A reading repeated by a DST fold resolves to its earliest instant;
    /// a reading skipped by a DST gap is rejected.
    pub fn at(&self, date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
        let naive = date.and_time(time);
        let resolved = match self {
            Zone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        };

        resolved.ok_or_else(|| {
            AppError::InvalidTime(format!("{} does not exist in zone {}", naive, self))
        })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsets() {
        assert_eq!(Zone::parse("UTC").unwrap(), Zone::utc());
        assert_eq!(Zone::parse("local").unwrap(), Zone::Local);

        let ist = Zone::parse("+05:30").unwrap();
        assert_eq!(ist, Zone::Fixed(FixedOffset::east_opt(19_800).unwrap()));
        assert_eq!(Zone::parse("+0530").unwrap(), ist);
        assert_eq!(
            Zone::parse("-04").unwrap(),
            Zone::Fixed(FixedOffset::west_opt(4 * 3600).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "Europe/Rome", "+5", "+25:00", "05:30", "+05:3x"] {
            assert!(Zone::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn day_boundary_follows_the_zone() {
        let ist = Zone::parse("+05:30").unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 7, 15, 20, 0, 0).unwrap();

        assert_eq!(Zone::utc().date_of(instant), NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());
        assert_eq!(ist.date_of(instant), NaiveDate::from_ymd_opt(2025, 7, 16).unwrap());
        assert_eq!(ist.time_of(instant), NaiveTime::from_hms_opt(1, 30, 0).unwrap());
    }

    #[test]
    fn wall_clock_round_trips_through_utc() {
        let ist = Zone::parse("+05:30").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 7, 16).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let instant = ist.at(date, time).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 7, 16, 3, 30, 0).unwrap());
        assert_eq!(ist.date_of(instant), date);
    }
}
