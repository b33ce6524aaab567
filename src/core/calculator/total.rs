//! Worked-minutes computation for a single day.

use crate::models::{DayTotals, TimeEntry};
use crate::utils::zone::Zone;
use chrono::{DateTime, NaiveDate, Utc};

/// Minutes contributed by one entry, or `None` when the entry is an open
/// session on a day that is not today (a miss-punch).
///
/// Closed entries count `|check_out - check_in|`, truncated to whole
/// minutes. An open entry on today counts the time elapsed up to `now` and
/// never goes below zero, so its contribution only grows as `now` advances.
/// A check-in later than `now` therefore counts 0, not its distance to `now`.
pub fn entry_minutes(
    entry: &TimeEntry,
    reference_date: NaiveDate,
    now: DateTime<Utc>,
    zone: Zone,
) -> Option<i64> {
    match entry.check_out {
        Some(check_out) => Some((check_out - entry.check_in).num_minutes().abs()),
        None if zone.date_of(now) == reference_date => {
            Some((now - entry.check_in).num_minutes().max(0))
        }
        None => None,
    }
}

/// Sum a day's entries. Pure; `now` must be supplied on every call.
pub fn compute_total(
    entries: &[TimeEntry],
    reference_date: NaiveDate,
    now: DateTime<Utc>,
    zone: Zone,
) -> DayTotals {
    entries
        .iter()
        .fold(DayTotals::default(), |mut acc, entry| {
            match entry_minutes(entry, reference_date, now, zone) {
                Some(minutes) => acc.minutes += minutes,
                None => acc.miss_punch = true,
            }
            acc
        })
}
