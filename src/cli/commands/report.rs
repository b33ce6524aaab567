use crate::cli::commands::day_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::AverageHours;
use crate::core::context::SessionContext;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, YELLOW, color_for_status};
use crate::utils::formatting::{bold, hours2readable, pad_right};

fn average_line(label: &str, avg: &AverageHours) -> String {
    let mut line = format!(
        "{} {} over {} worked day(s)",
        bold(&pad_right(label, 24)),
        hours2readable(avg.hours),
        avg.counted_days
    );
    if avg.miss_punch_days > 0 {
        line.push_str(&format!(
            " {YELLOW}({} miss-punch day(s) left out: close their open session to count them){RESET}",
            avg.miss_punch_days
        ));
    }
    line
}

pub fn handle(cmd: &Commands, cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    if let Commands::Report { date, json } = cmd {
        let reference = day_arg(date.as_deref(), ctx)?;

        let mut store = open_store(cfg, &ctx.user)?;
        let report = ReportLogic::build(
            store.as_mut(),
            ctx,
            reference,
            cfg.monthly_average_from_day,
        )?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        header(format!("Report for {}", reference));

        let status = report.day.status;
        println!(
            "{} {} ({}{}{})",
            bold(&pad_right("Day total:", 24)),
            report.day.total,
            color_for_status(status),
            status,
            RESET
        );

        let week_label = format!("Week {}..{}:", report.week_start.format("%m-%d"), report.week_end.format("%m-%d"));
        println!("{}", average_line(&week_label, &report.week));

        let month_label = format!("Month {}:", reference.format("%Y-%m"));
        match &report.month {
            Some(avg) => println!("{}", average_line(&month_label, avg)),
            None => info(format!(
                "Monthly average is shown from day {} of the month.",
                cfg.monthly_average_from_day
            )),
        }
    }
    Ok(())
}
