use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::core::{describe_entry, record};
use crate::errors::AppResult;
use crate::models::{DailyLog, EntryDraft};
use crate::store::LogStore;
use chrono::NaiveDate;

/// `ADD(date, entry)`.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        date: NaiveDate,
        draft: EntryDraft,
    ) -> AppResult<DailyLog> {
        let log = store.modify(date, &mut |log| {
            DailyLogAggregator::add_entry(log, draft, ctx)
        })?;

        if let Some(entry) = log.last_entry() {
            let msg = format!("#{} {}", log.entries.len(), describe_entry(entry));
            record(store, "add", date, &msg);
        }

        tracing::debug!(%date, sessions = log.session_count, "entry added");
        Ok(log)
    }
}
