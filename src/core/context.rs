//! Per-invocation context threaded through every logic call.

use crate::core::clock::Clock;
use crate::utils::zone::Zone;
use chrono::{DateTime, NaiveDate, Utc};

/// Who is acting, in which zone, and at which instant.
///
/// Built once per command from configuration and the clock. `now` is
/// captured at construction so that every computation of the same command
/// agrees on what "today" is.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user: String,
    pub zone: Zone,
    pub now: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(user: impl Into<String>, zone: Zone, clock: &dyn Clock) -> Self {
        Self::at(user, zone, clock.now())
    }

    pub fn at(user: impl Into<String>, zone: Zone, now: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            zone,
            now,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.zone.date_of(self.now)
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today() == date
    }
}
