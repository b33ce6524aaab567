use crate::cli::commands::day_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::total::entry_minutes;
use crate::core::context::SessionContext;
use crate::core::day::DayLogic;
use crate::errors::AppResult;
use crate::models::day_summary::DayView;
use crate::store::open_store;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREY, RESET, color_for_status, colorize_in_out};
use crate::utils::formatting::{bold, mins2readable};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    if let Commands::Show { date, json } = cmd {
        let d = day_arg(date.as_deref(), ctx)?;
        let mut store = open_store(cfg, &ctx.user)?;
        let view = DayLogic::get_day(store.as_mut(), ctx, d)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print_day(&view, ctx);
        }
    }
    Ok(())
}

/// Sessions table, total and status of one day.
pub(crate) fn print_day(view: &DayView, ctx: &SessionContext) {
    let log = &view.log;
    header(format!("{} ({})", log.date, log.date.format("%A")));

    if log.is_empty() {
        info("No sessions recorded.");
    } else {
        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("IN", 11),
            Column::new("OUT", 11),
            Column::new("DURATION", 10),
        ]);

        for (i, entry) in log.entries.iter().enumerate() {
            let check_in = format_clock(entry.check_in, ctx.zone, log.date);
            let check_out = entry
                .check_out
                .map(|out| format_clock(out, ctx.zone, log.date))
                .unwrap_or_else(|| "--:--".to_string());

            let duration = match entry_minutes(entry, log.date, ctx.now, ctx.zone) {
                Some(m) if entry.is_open() => format!("{} …", mins2readable(m)),
                Some(m) => mins2readable(m),
                None => format!("{GREY}--{RESET}"),
            };

            table.add_row(vec![
                (i + 1).to_string(),
                colorize_in_out(&check_in, true),
                colorize_in_out(&check_out, false),
                duration,
            ]);
        }
        print!("{}", table.render());
    }

    println!();
    println!("{} {}   Sessions: {}", bold("Total:"), view.total, log.session_count);

    let status = view.status;
    let mut line = format!("{}{}{}", color_for_status(status), status, RESET);
    if let Some(action) = status.next_action() {
        line.push_str(&format!(" (next punch: {action})"));
    }
    println!("{} {}", bold("Status:"), line);

    if log.miss_punch
        && let Some(i) = log.open_entry_index()
    {
        warning(format!(
            "Miss-punch: session #{} has no check-out; the day total is unresolved.",
            i + 1
        ));
    }
}
