use super::day_total::{DayTotal, DayTotals};
use super::time_entry::TimeEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All entries recorded for one calendar day.
///
/// `total_minutes`, `session_count` and `miss_punch` are derived from
/// `entries`. They are serialized for readability of the stored documents
/// but always recomputed after a read or a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(rename = "logs", default)]
    pub entries: Vec<TimeEntry>,
    #[serde(default)]
    pub total_minutes: i64,
    #[serde(rename = "sessions", default)]
    pub session_count: usize,
    #[serde(default)]
    pub miss_punch: bool,
}

impl DailyLog {
    pub fn empty(date: NaiveDate) -> Self {
        Self::with_entries(date, Vec::new())
    }

    /// Log with stale (zeroed) totals; callers refresh it through the aggregator.
    pub fn with_entries(date: NaiveDate, entries: Vec<TimeEntry>) -> Self {
        Self {
            date,
            entries,
            total_minutes: 0,
            session_count: 0,
            miss_punch: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_entry(&self) -> Option<&TimeEntry> {
        self.entries.last()
    }

    /// Index of the first entry without check-out, if any.
    pub fn open_entry_index(&self) -> Option<usize> {
        self.entries.iter().position(TimeEntry::is_open)
    }

    pub fn totals(&self) -> DayTotals {
        DayTotals {
            minutes: self.total_minutes,
            miss_punch: self.miss_punch,
        }
    }

    pub fn total(&self) -> DayTotal {
        self.totals().reported()
    }

    pub(crate) fn apply_totals(&mut self, totals: DayTotals) {
        self.total_minutes = totals.minutes;
        self.miss_punch = totals.miss_punch;
        self.session_count = self.entries.len();
    }
}
