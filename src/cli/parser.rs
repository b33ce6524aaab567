use crate::store::StorageKind;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for timeportal
/// CLI application to record daily check-ins and check-outs
#[derive(Parser)]
#[command(
    name = "timeportal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily time tracking: punch in and out, correct sessions, see totals and averages",
    long_about = None,
    args_override_self = true
)]
pub struct Cli {
    /// Override database path (storage = sqlite)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the JSON data directory (storage = json)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Storage backend to use instead of the configured one
    #[arg(global = true, long = "storage", value_enum)]
    pub storage: Option<StorageKind>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Time zone: local, UTC, or a fixed offset like +05:30
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Pretend the current instant is this RFC 3339 timestamp
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
    Csv,
}

fn entry_index() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the storage
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the SQLite database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the recorded operations")]
        print: bool,
    },

    /// Show the sessions, total and status of a day
    Show {
        /// YYYY-MM-DD, today or yesterday (default: today)
        date: Option<String>,

        #[arg(long = "json", help = "Print the day as JSON")]
        json: bool,
    },

    /// Add a session to a day
    Add {
        /// YYYY-MM-DD, today or yesterday
        date: String,

        #[arg(long = "in", help = "Check-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Check-out time (HH:MM); omit to leave the session open")]
        end: Option<String>,
    },

    /// Replace a session of a day
    Edit {
        /// YYYY-MM-DD, today or yesterday
        date: String,

        #[arg(long = "index", value_parser = entry_index(), help = "Session number as shown by `show` (1 = first)")]
        index: usize,

        #[arg(long = "in", help = "New check-in time (HH:MM); keeps the current one if omitted")]
        start: Option<String>,

        #[arg(long = "out", help = "New check-out time (HH:MM); keeps the current one if omitted")]
        end: Option<String>,

        #[arg(long = "open", conflicts_with = "end", help = "Clear the check-out time")]
        open: bool,
    },

    /// Delete a session, or every session of a day
    Del {
        /// YYYY-MM-DD, today or yesterday
        date: String,

        #[arg(
            long = "index",
            value_parser = entry_index(),
            required_unless_present = "all",
            conflicts_with = "all",
            help = "Session number as shown by `show` (1 = first)"
        )]
        index: Option<usize>,

        #[arg(long = "all", help = "Delete every session of the day")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Check in, or check out if a session is open (today only)
    Punch,

    /// List per-day totals over a period
    List {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD or a range like 2025-06:2025-08 (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },

    /// Show a day with its weekly and monthly averages
    Report {
        #[arg(long, help = "Reference day (default: today)")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
}
