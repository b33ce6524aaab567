use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::store::StorageKind;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        if cfg.storage != StorageKind::Sqlite {
            return Err(AppError::Config(format!(
                "`db` maintains the SQLite backend; current storage is {}",
                cfg.storage
            )));
        }

        let mut pool = DbPool::new(&expand_tilde(&cfg.database))?;

        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            println!("{}▶ Running migrations ({} pending)…{}", CYAN, pending.len(), RESET);
            let applied = run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed ({} applied).{}\n", GREEN, applied, RESET);
        }

        if *info {
            init_db(&pool.conn)?;
            stats::print_db_info(&mut pool, &cfg.user)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool.with_conn(|conn| {
                Ok(conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
            })?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.with_conn(|conn| Ok(conn.execute_batch("VACUUM;")?))?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
