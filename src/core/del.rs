use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::core::record;
use crate::errors::AppResult;
use crate::models::DailyLog;
use crate::store::LogStore;
use chrono::NaiveDate;

/// `DELETE(date, index)`; `index` is 0-based.
pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        date: NaiveDate,
        index: usize,
    ) -> AppResult<DailyLog> {
        let log = store.modify(date, &mut |log| {
            DailyLogAggregator::delete_entry(log, index, ctx)
        })?;

        record(store, "del", date, &format!("#{} removed", index + 1));
        Ok(log)
    }

    /// Remove every entry of `date`. Returns how many were removed.
    pub fn clear(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        date: NaiveDate,
    ) -> AppResult<usize> {
        let mut removed = 0;
        store.modify(date, &mut |log| {
            removed = log.entries.len();
            Ok(DailyLogAggregator::refresh(DailyLog::empty(log.date), ctx))
        })?;

        if removed > 0 {
            record(store, "del", date, &format!("all {} entries removed", removed));
        }
        Ok(removed)
    }
}
