use crate::cli::commands::day_arg;
use crate::cli::commands::show::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::errors::AppResult;
use crate::models::EntryDraft;
use crate::models::day_summary::DayView;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_instant;

pub fn handle(cmd: &Commands, cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        let d = day_arg(Some(date.as_str()), ctx)?;

        let draft = EntryDraft::new(
            parse_optional_instant(start.as_deref(), d, ctx.zone)?,
            parse_optional_instant(end.as_deref(), d, ctx.zone)?,
        );

        let mut store = open_store(cfg, &ctx.user)?;
        let log = AddLogic::apply(store.as_mut(), ctx, d, draft)?;

        success(format!("Session #{} added to {}.", log.entries.len(), d));

        let status = DailyLogAggregator::status(&log, ctx);
        print_day(&DayView::new(log, status), ctx);
    }
    Ok(())
}
