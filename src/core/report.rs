use crate::core::calculator::average::{AverageHours, average_hours, monthly_average_due};
use crate::core::context::SessionContext;
use crate::core::day::DayLogic;
use crate::errors::AppResult;
use crate::models::day_summary::DayView;
use crate::store::LogStore;
use crate::utils::date::{month_of, week_of};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub reference: NaiveDate,
    pub day: DayView,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub week: AverageHours,
    /// `None` before the configured day of the month.
    pub month: Option<AverageHours>,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Day view plus weekly and monthly averages around `reference`.
    pub fn build(
        store: &mut dyn LogStore,
        ctx: &SessionContext,
        reference: NaiveDate,
        monthly_from_day: u32,
    ) -> AppResult<Report> {
        let day = DayLogic::get_day(store, ctx, reference)?;

        let week_days = week_of(reference);
        let week_totals = DayLogic::totals(store, ctx, &week_days)?;
        let week = average_hours(&week_totals);

        let month = if monthly_average_due(reference, monthly_from_day) {
            let month_totals = DayLogic::totals(store, ctx, &month_of(reference))?;
            Some(average_hours(&month_totals))
        } else {
            None
        };

        tracing::debug!(%reference, week_days = week.counted_days, "report built");

        Ok(Report {
            reference,
            day,
            week_start: week_days[0],
            week_end: week_days[6],
            week,
            month,
        })
    }
}
