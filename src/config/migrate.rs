//! Configuration file upkeep: detect keys missing from an older file and
//! rewrite it with defaults filled in.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_keys() -> AppResult<Vec<String>> {
    let value = serde_yaml::to_value(Config::default())?;
    let map = value
        .as_mapping()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))?;

    Ok(map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys known to this version but absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let present = read_mapping(path)?;

    Ok(default_keys()?
        .into_iter()
        .filter(|k| !present.contains_key(k.as_str()))
        .collect())
}

/// Keys present in the file that this version does not know about.
pub fn unknown_fields(path: &Path) -> AppResult<Vec<String>> {
    let known = default_keys()?;
    let present = read_mapping(path)?;

    Ok(present
        .keys()
        .filter_map(|k| k.as_str())
        .filter(|k| !known.iter().any(|known| known == k))
        .map(str::to_string)
        .collect())
}

/// Rewrite the file with every missing key set to its default.
/// Returns the keys that were added; an up-to-date file is left untouched.
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;

    tracing::info!(added = ?missing, file = %path.display(), "configuration migrated");
    Ok(missing)
}
