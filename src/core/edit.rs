use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::core::{describe_entry, record};
use crate::errors::AppResult;
use crate::models::{DailyLog, EntryPatch};
use crate::store::LogStore;
use chrono::NaiveDate;

/// `UPDATE(date, index, entry)`; `index` is 0-based. The patch is merged
/// with the stored entry under the store's lock.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        date: NaiveDate,
        index: usize,
        patch: EntryPatch,
    ) -> AppResult<DailyLog> {
        let log = store.modify(date, &mut |log| {
            DailyLogAggregator::patch_entry(log, index, patch, ctx)
        })?;

        let msg = format!("#{} {}", index + 1, describe_entry(&log.entries[index]));
        record(store, "edit", date, &msg);

        Ok(log)
    }
}
