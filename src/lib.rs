//! timeportal library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (daily-log aggregation, storage backends, configuration).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use crate::cli::commands;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::context::SessionContext;
use crate::errors::AppResult;
use crate::utils::time::parse_instant;
use crate::utils::zone::Zone;
use clap::Parser;

/// Apply the global command-line overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(storage) = cli.storage {
        cfg.storage = storage;
    }
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }
    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.clone();
    }
}

/// Who, where and when for the commands that touch daily logs.
pub fn session(cli: &Cli, cfg: &Config) -> AppResult<SessionContext> {
    let zone = Zone::parse(&cfg.timezone)?;

    let clock: Box<dyn Clock> = match &cli.now {
        Some(raw) => Box::new(FixedClock(parse_instant(raw)?)),
        None => Box::new(SystemClock),
    };

    let ctx = SessionContext::new(cfg.user.clone(), zone, clock.as_ref());
    tracing::debug!(user = %ctx.user, zone = %ctx.zone, now = %ctx.now, "session ready");
    Ok(ctx)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        cmd => {
            let ctx = session(cli, cfg)?;
            match cmd {
                Commands::Show { .. } => commands::show::handle(cmd, cfg, &ctx),
                Commands::Add { .. } => commands::add::handle(cmd, cfg, &ctx),
                Commands::Edit { .. } => commands::edit::handle(cmd, cfg, &ctx),
                Commands::Del { .. } => commands::del::handle(cmd, cfg, &ctx),
                Commands::Punch => commands::punch::handle(cfg, &ctx),
                Commands::List { .. } => commands::list::handle(cmd, cfg, &ctx),
                Commands::Report { .. } => commands::report::handle(cmd, cfg, &ctx),
                Commands::Init
                | Commands::Config { .. }
                | Commands::Db { .. }
                | Commands::Log { .. } => Ok(()),
            }
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    crate::utils::logging::enable_logging(&cfg.log_level);
    tracing::debug!(storage = %cfg.storage, user = %cfg.user, "configuration loaded");

    dispatch(&cli, &cfg)
}
