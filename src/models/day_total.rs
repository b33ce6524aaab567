use serde::Serialize;
use std::fmt;

use crate::utils::formatting::mins2readable;

/// Raw result of summing one day's entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    /// Whole minutes of every entry that could be measured.
    pub minutes: i64,
    /// An open session on a day other than today.
    pub miss_punch: bool,
}

impl DayTotals {
    /// The value a caller may show: a miss-punch day has no trustworthy total.
    pub fn reported(&self) -> DayTotal {
        if self.miss_punch {
            DayTotal::Unresolved
        } else {
            DayTotal::Minutes(self.minutes)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "camelCase")]
pub enum DayTotal {
    Minutes(i64),
    Unresolved,
}

impl DayTotal {
    pub fn minutes(&self) -> Option<i64> {
        match self {
            DayTotal::Minutes(m) => Some(*m),
            DayTotal::Unresolved => None,
        }
    }
}

impl fmt::Display for DayTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayTotal::Minutes(m) => write!(f, "{}", mins2readable(*m)),
            DayTotal::Unresolved => write!(f, "Miss-Punch"),
        }
    }
}
