//! Report configuration keys that are missing from the file on disk.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;

pub const KNOWN_KEYS: [&str; 8] = [
    "database",
    "source",
    "json_dir",
    "admin_email",
    "row_limit",
    "feed_limit",
    "default_range",
    "export_dir",
];

/// Keys absent from the config file (defaults apply for them), in
/// declaration order. A missing file reports every key.
pub fn missing_keys() -> AppResult<Vec<&'static str>> {
    let path = Config::config_file();
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(&path)?;
    let value: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

    let Value::Mapping(map) = value else {
        return Ok(KNOWN_KEYS.to_vec());
    };

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
