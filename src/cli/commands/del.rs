use crate::cli::commands::day_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::SessionContext;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, ctx: &SessionContext) -> AppResult<()> {
    if let Commands::Del {
        date,
        index,
        all: _,
        yes,
    } = cmd
    {
        let d = day_arg(Some(date.as_str()), ctx)?;

        let prompt = match index {
            Some(i) => format!("Delete session #{} of {}? This action is irreversible.", i, d),
            None => format!("Delete ALL sessions of {}? This action is irreversible.", d),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg, &ctx.user)?;

        match index {
            Some(i) => {
                let log = DeleteLogic::apply(store.as_mut(), ctx, d, i - 1)?;
                success(format!(
                    "Session #{} of {} has been deleted ({} left).",
                    i,
                    d,
                    log.entries.len()
                ));
            }
            None => {
                let removed = DeleteLogic::clear(store.as_mut(), ctx, d)?;
                if removed == 0 {
                    info(format!("No sessions recorded for {}.", d));
                } else {
                    success(format!("All {} sessions of {} have been deleted.", removed, d));
                }
            }
        }
    }

    Ok(())
}
