use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::errors::AppResult;
use crate::models::DayTotals;
use crate::models::day_summary::{DaySummary, DayView};
use crate::store::LogStore;
use chrono::NaiveDate;

pub struct DayLogic;

impl DayLogic {
    /// `GET_DAY(date)`: the stored log with fresh totals and status.
    pub fn get_day(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        date: NaiveDate,
    ) -> AppResult<DayView> {
        let log = DailyLogAggregator::refresh(store.read(date)?, ctx);
        let status = DailyLogAggregator::status(&log, ctx);
        Ok(DayView::new(log, status))
    }

    /// One summary per day with entries between `start` and `end` (inclusive).
    pub fn summaries(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DaySummary>> {
        let dates: Vec<NaiveDate> = store
            .available_dates()?
            .into_iter()
            .filter(|d| *d >= start && *d <= end)
            .collect();

        let mut out = Vec::with_capacity(dates.len());
        for log in store.read_many(&dates)? {
            let log = DailyLogAggregator::refresh(log, ctx);
            let status = DailyLogAggregator::status(&log, ctx);
            out.push(DaySummary::from_log(&log, status));
        }
        Ok(out)
    }

    /// Fresh totals for each of `dates`; days without entries count as zero.
    pub fn totals(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        dates: &[NaiveDate],
    ) -> AppResult<Vec<DayTotals>> {
        Ok(store
            .read_many(dates)?
            .into_iter()
            .map(|log| DailyLogAggregator::refresh(log, ctx).totals())
            .collect())
    }
}
