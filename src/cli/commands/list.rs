use crate::cli::parser::{Commands, ListFormat};
use crate::config::Config;
use crate::core::context::SessionContext;
use crate::core::day::DayLogic;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::store::open_store;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::{month_of, parse_period};
use crate::utils::formatting::{bold, mins2readable};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    if let Commands::List { period, format } = cmd {
        let (start, end) = resolve_period(period.as_deref(), ctx)?;

        let mut store = open_store(cfg, &ctx.user)?;
        let days = DayLogic::summaries(store.as_mut(), ctx, start, end)?;

        match format {
            ListFormat::Text => print_text(&days, start, end),
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&days)?),
            ListFormat::Csv => write_csv(&days, io::stdout())?,
        }
    }
    Ok(())
}

/// Default period: the current month.
fn resolve_period(period: Option<&str>, ctx: &SessionContext) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => parse_period(p),
        None => {
            let days = month_of(ctx.today());
            Ok((days[0], days[days.len() - 1]))
        }
    }
}

fn print_text(days: &[DaySummary], start: NaiveDate, end: NaiveDate) {
    header(format!("{} → {}", start, end));

    if days.is_empty() {
        info("No sessions recorded in this period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("DAY", 3),
        Column::new("SESSIONS", 8),
        Column::new("TOTAL", 10),
        Column::new("STATUS", 11),
    ]);

    let mut minutes = 0;
    let mut miss_punch = 0;
    for day in days {
        match day.total.minutes() {
            Some(m) => minutes += m,
            None => miss_punch += 1,
        }
        table.add_row(vec![
            day.date.to_string(),
            day.date.format("%a").to_string(),
            day.sessions.to_string(),
            day.total.to_string(),
            format!("{}{}{}", color_for_status(day.status), day.status, RESET),
        ]);
    }
    print!("{}", table.render());

    println!();
    println!("{} {} over {} day(s)", bold("Total:"), mins2readable(minutes), days.len());
    if miss_punch > 0 {
        warning(format!("{} day(s) with a miss-punch are not counted.", miss_punch));
    }
}

fn write_csv<W: io::Write>(days: &[DaySummary], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["date", "sessions", "total_minutes", "total", "miss_punch", "status"])?;

    for day in days {
        let minutes = day.total.minutes().map(|m| m.to_string()).unwrap_or_default();
        wtr.write_record([
            day.date.to_string(),
            day.sessions.to_string(),
            minutes,
            day.total.to_string(),
            day.miss_punch.to_string(),
            day.status.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
