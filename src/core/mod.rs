//! Business logic. `aggregator` and `calculator` are pure; the `*Logic`
//! types run them against a store (read, apply, write back).

pub mod add;
pub mod aggregator;
pub mod calculator;
pub mod clock;
pub mod context;
pub mod day;
pub mod del;
pub mod edit;
pub mod log;
pub mod punch;
pub mod report;

pub use aggregator::DailyLogAggregator;
pub use context::SessionContext;

use crate::models::TimeEntry;
use crate::store::LogStore;
use chrono::NaiveDate;

/// Audit a successful mutation. A failing audit write must not undo or
/// hide a mutation that is already stored, so it is only reported.
pub(crate) fn record(store: &mut dyn LogStore, operation: &str, date: NaiveDate, message: &str) {
    let target = date.format("%Y-%m-%d").to_string();
    if let Err(e) = store.audit(operation, &target, message) {
        tracing::warn!(operation, %date, error = %e, "failed to write audit record");
    }
}

pub(crate) fn describe_entry(entry: &TimeEntry) -> String {
    match entry.check_out {
        Some(out) => format!("{} → {}", entry.check_in.to_rfc3339(), out.to_rfc3339()),
        None => format!("{} → open", entry.check_in.to_rfc3339()),
    }
}
