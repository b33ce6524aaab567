use super::daily_log::DailyLog;
use super::day_total::DayTotal;
use super::status::Status;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of a period listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub sessions: usize,
    pub total: DayTotal,
    pub miss_punch: bool,
    pub status: Status,
}

impl DaySummary {
    pub fn from_log(log: &DailyLog, status: Status) -> Self {
        Self {
            date: log.date,
            sessions: log.session_count,
            total: log.total(),
            miss_punch: log.miss_punch,
            status,
        }
    }
}

/// Everything `GET_DAY` answers: the refreshed log plus what it means today.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    #[serde(flatten)]
    pub log: DailyLog,
    pub total: DayTotal,
    pub status: Status,
}

impl DayView {
    pub fn new(log: DailyLog, status: Status) -> Self {
        let total = log.total();
        Self { log, total, status }
    }
}
