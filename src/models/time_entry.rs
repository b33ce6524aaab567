use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One work session: a check-in and, once closed, a check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub check_in: DateTime<Utc>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
}

impl TimeEntry {
    pub fn open(check_in: DateTime<Utc>) -> Self {
        Self {
            check_in,
            check_out: None,
        }
    }

    pub fn closed(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        Self {
            check_in,
            check_out: Some(check_out),
        }
    }

    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

/// Entry as supplied by a caller, before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
}

impl EntryDraft {
    pub fn new(check_in: Option<DateTime<Utc>>, check_out: Option<DateTime<Utc>>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Check-in is mandatory and check-out may not precede it.
    pub fn validate(self) -> AppResult<TimeEntry> {
        let check_in = self
            .check_in
            .ok_or_else(|| AppError::validation("check-in time is required"))?;

        if let Some(check_out) = self.check_out
            && check_out < check_in
        {
            return Err(AppError::validation(format!(
                "check-out ({}) must not be before check-in ({})",
                check_out.to_rfc3339(),
                check_in.to_rfc3339()
            )));
        }

        Ok(TimeEntry {
            check_in,
            check_out: self.check_out,
        })
    }
}

/// Partial replacement for a stored entry; `None` keeps the stored value.
/// `check_out: Some(None)` reopens the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<Option<DateTime<Utc>>>,
}

impl EntryPatch {
    pub fn merge(self, current: TimeEntry) -> EntryDraft {
        EntryDraft {
            check_in: Some(self.check_in.unwrap_or(current.check_in)),
            check_out: self.check_out.unwrap_or(current.check_out),
        }
    }
}
