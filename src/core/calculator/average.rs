//! Average worked hours over a window of days.

use crate::models::DayTotals;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Day of month from which a monthly average is considered meaningful.
pub const DEFAULT_MONTHLY_AVERAGE_FROM_DAY: u32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageHours {
    pub hours: f64,
    /// Days with a positive, resolved total (the denominator).
    pub counted_days: usize,
    /// Days left out because their total is unresolved.
    pub miss_punch_days: usize,
}

/// Mean hours per worked day.
///
/// Days with zero minutes are not working days and stay out of the
/// denominator. Miss-punch days are left out too: their sum is partial.
pub fn average_hours<'a, I>(days: I) -> AverageHours
where
    I: IntoIterator<Item = &'a DayTotals>,
{
    let mut total_minutes = 0i64;
    let mut report = AverageHours::default();

    for day in days {
        if day.miss_punch {
            report.miss_punch_days += 1;
            continue;
        }
        if day.minutes > 0 {
            total_minutes += day.minutes;
            report.counted_days += 1;
        }
    }

    if report.counted_days > 0 {
        report.hours = total_minutes as f64 / 60.0 / report.counted_days as f64;
    }

    report
}

/// A monthly average is only reported from `from_day` of the month onward.
pub fn monthly_average_due(reference: NaiveDate, from_day: u32) -> bool {
    reference.day() >= from_day
}
