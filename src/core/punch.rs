use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::core::{describe_entry, record};
use crate::errors::AppResult;
use crate::models::{DailyLog, Status};
use crate::store::LogStore;

/// `CHECK_IN_OUT(now)`: always acts on today's log.
pub struct PunchLogic;

impl PunchLogic {
    pub fn apply(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
    ) -> AppResult<(DailyLog, Status)> {
        let today = ctx.today();
        let mut status = Status::Available;

        let log = store.modify(today, &mut |log| {
            let (log, next) = DailyLogAggregator::check_in_or_out(log, ctx)?;
            status = next;
            Ok(log)
        })?;

        if let Some(entry) = log.last_entry() {
            let op = match status {
                Status::Working => "check-in",
                _ => "check-out",
            };
            let msg = format!("{} #{} {}", op, log.entries.len(), describe_entry(entry));
            record(store, "punch", today, &msg);
        }

        tracing::debug!(%today, %status, "punch applied");
        Ok((log, status))
    }
}
