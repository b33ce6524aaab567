use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{StorageKind, open_store};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (the file is skipped in test mode)
///  - the storage of the configured backend, with its migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = Config::init_all(cfg, cli.test)?;

    println!("⚙️  Initializing timeportal…");
    println!("📄 Config file : {}", path.display());
    match cfg.storage {
        StorageKind::Sqlite => println!("🗄️  Database    : {}", expand_tilde(&cfg.database).display()),
        StorageKind::Json => println!("🗂️  Data dir    : {}", expand_tilde(&cfg.data_dir).display()),
    }

    let mut store = open_store(cfg, &cfg.user)?;

    if let Err(e) = store.audit(
        "init",
        "",
        &format!("{} storage initialized for user {}", cfg.storage, cfg.user),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("timeportal initialization completed!");
    Ok(())
}
