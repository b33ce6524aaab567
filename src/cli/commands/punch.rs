use crate::cli::commands::show::print_day;
use crate::config::Config;
use crate::core::context::SessionContext;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::models::Status;
use crate::models::day_summary::DayView;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::time::format_clock;

pub fn handle(cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    let mut store = open_store(cfg, &ctx.user)?;
    let (log, status) = PunchLogic::apply(store.as_mut(), ctx)?;

    let at = format_clock(ctx.now, ctx.zone, log.date);
    match status {
        Status::Working => success(format!("Checked in at {}.", at)),
        _ => success(format!("Checked out at {}.", at)),
    }

    print_day(&DayView::new(log, status), ctx);
    Ok(())
}
