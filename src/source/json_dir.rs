use super::RecordSource;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, SourceTable};
use crate::utils::coerce::parse_date;
use serde_json::Value;
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

/// Reads `<dir>/reservations.json` and `<dir>/call_logs.json`, each a JSON
/// array of objects. A missing file is an empty table.
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: PathBuf::from(dir),
        }
    }

    fn file_for(&self, table: SourceTable) -> PathBuf {
        self.dir.join(format!("{}.json", table.table_name()))
    }
}

/// Parse a JSON array of records. Entries that are not objects are skipped.
pub fn parse_records(content: &str, table: SourceTable) -> AppResult<Vec<Record>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| AppError::fetch(table.table_name(), e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(AppError::fetch(
            table.table_name(),
            "expected a JSON array of records",
        ));
    };

    Ok(items
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            other => {
                log::warn!("{table}: skipping non-object entry {other}");
                None
            }
        })
        .collect())
}

fn newest_first(a: &Record, b: &Record) -> Ordering {
    let da = parse_date(a.get("created_at"));
    let db = parse_date(b.get("created_at"));
    db.cmp(&da)
}

impl RecordSource for JsonDirSource {
    fn fetch_table(&self, table: SourceTable, limit: usize) -> AppResult<Vec<Record>> {
        let path = self.file_for(table);
        if !path.exists() {
            log::info!("{} not found, treating {table} as empty", path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::fetch(table.table_name(), e.to_string()))?;
        let mut records = parse_records(&content, table)?;
        records.sort_by(newest_first);
        records.truncate(limit);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.dir.display())
    }
}
