pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod report;
pub mod show;

use crate::core::context::SessionContext;
use crate::errors::AppResult;
use crate::utils::date::resolve_date;
use chrono::NaiveDate;

/// Date argument of a day command; `None` means today in the session zone.
pub(crate) fn day_arg(raw: Option<&str>, ctx: &SessionContext) -> AppResult<NaiveDate> {
    match raw {
        Some(s) => resolve_date(s, ctx.today()),
        None => Ok(ctx.today()),
    }
}
