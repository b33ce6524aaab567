use crate::cli::commands::day_arg;
use crate::cli::commands::show::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::DailyLogAggregator;
use crate::core::context::SessionContext;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::EntryPatch;
use crate::models::day_summary::DayView;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_instant;

pub fn handle(cmd: &Commands, cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    if let Commands::Edit {
        date,
        index,
        start,
        end,
        open,
    } = cmd
    {
        let d = day_arg(Some(date.as_str()), ctx)?;
        // the parser only accepts 1..
        let idx = index - 1;

        let start = parse_optional_instant(start.as_deref(), d, ctx.zone)?;
        let end = parse_optional_instant(end.as_deref(), d, ctx.zone)?;

        // omitted times keep their stored value
        let patch = EntryPatch {
            check_in: start,
            check_out: if *open { Some(None) } else { end.map(Some) },
        };

        let mut store = open_store(cfg, &ctx.user)?;
        let log = EditLogic::apply(store.as_mut(), ctx, d, idx, patch)?;
        success(format!("Session #{} of {} updated.", index, d));

        let status = DailyLogAggregator::status(&log, ctx);
        print_day(&DayView::new(log, status), ctx);
    }
    Ok(())
}
