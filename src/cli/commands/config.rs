use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_fields, unknown_fields};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn edit_file(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    match Command::new(&editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited successfully using '{}'", editor));
        }
        _ if editor != fallback => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor, fallback
            ));
            match Command::new(&fallback).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    fallback
                )),
                _ => warning(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    fallback
                )),
            }
        }
        _ => warning(format!("Failed to edit configuration file using '{}'", editor)),
    }
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}; run `timeportal init` first.",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = missing_fields(&path)?;
            let unknown = unknown_fields(&path)?;

            if missing.is_empty() && unknown.is_empty() {
                success("Configuration file is up to date.");
            }
            if !missing.is_empty() {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `timeportal config --migrate` to add them with default values.");
            }
            if !unknown.is_empty() {
                warning(format!("Unknown fields (ignored): {}", unknown.join(", ")));
            }
        }

        if *migrate {
            let added = migrate_config(&path)?;
            if added.is_empty() {
                info("Configuration file already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        if *edit_config {
            edit_file(&path, editor.as_deref());
        }
    }

    Ok(())
}
