//! Diagnostic logging to stderr via `tracing`.
//!
//! User-facing output goes through `ui::messages`; this is for operators
//! debugging storage or time zone issues (`TIMEPORTAL_LOG=debug`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TIMEPORTAL_LOG";

fn directive(level: &str) -> String {
    // a full directive ("timeportal=debug,rusqlite=trace") is used verbatim
    if level.contains('=') {
        level.to_string()
    } else {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
    }
}

pub fn enable_logging(config_level: &str) {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| config_level.to_string());

    let filter = EnvFilter::try_new(directive(&level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (tests calling run() twice) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
