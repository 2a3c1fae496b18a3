//! Record stores the dashboard can read from.

mod json_dir;
mod sqlite;

pub use json_dir::{JsonDirSource, parse_records};
pub use sqlite::SqliteSource;

use crate::config::{Config, SourceKind};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, SourceTable};
use std::path::Path;

/// A read-only table store.
///
/// `fetch_table` returns at most `limit` records, newest `created_at` first.
/// Errors abort the whole load cycle.
pub trait RecordSource {
    fn fetch_table(&self, table: SourceTable, limit: usize) -> AppResult<Vec<Record>>;

    /// Short human description for status output.
    fn describe(&self) -> String;
}

/// Build the source named by the configuration, checking that its
/// credentials (database file or JSON directory) are usable.
pub fn from_config(cfg: &Config) -> AppResult<Box<dyn RecordSource + Sync>> {
    match cfg.source {
        SourceKind::Sqlite => {
            if cfg.database.trim().is_empty() {
                return Err(AppError::MissingCredentials(
                    "`database` is not set in the configuration".to_string(),
                ));
            }
            Ok(Box::new(SqliteSource::new(&cfg.database)))
        }
        SourceKind::Json => {
            let dir = cfg.json_dir.as_deref().unwrap_or("").trim();
            if dir.is_empty() || !Path::new(dir).is_dir() {
                return Err(AppError::MissingCredentials(format!(
                    "`json_dir` must point to an existing directory (got '{dir}')"
                )));
            }
            Ok(Box::new(JsonDirSource::new(dir)))
        }
    }
}
