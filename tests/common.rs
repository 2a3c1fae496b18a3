#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use opsdash::core::normalize::{normalize_call, normalize_reservation};
use opsdash::errors::{AppError, AppResult};
use opsdash::models::{NormalizedRow, Record, SourceTable};
use opsdash::source::RecordSource;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// `opsdash` binary with its config directory pointed at `home`.
pub fn ops(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("opsdash");
    cmd.env("OPSDASH_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("opsdash_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("test record must be an object, got {other}"),
    }
}

pub fn booking(guest: &str, arrival: &str, created_at: &str, property: &str, total: Value) -> Record {
    record(json!({
        "created_at": created_at,
        "guest_name": guest,
        "arrival_date": arrival,
        "nights": 2,
        "total_due": total,
        "room_type": "Double",
        "property_id": property,
    }))
}

pub fn call(created_at: &str, property: &str, duration: Value, summary: &str) -> Record {
    record(json!({
        "created_at": created_at,
        "property_id": property,
        "duration": duration,
        "sentiment": "neutral",
        "summary": summary,
    }))
}

pub fn booking_row(guest: &str, arrival: &str, created_at: &str, property: &str, total: Value) -> NormalizedRow {
    normalize_reservation(booking(guest, arrival, created_at, property, total))
}

pub fn call_row(created_at: &str, property: &str, duration: Value, summary: &str) -> NormalizedRow {
    normalize_call(call(created_at, property, duration, summary))
}

/// In-memory record store; optionally fails one table.
#[derive(Default)]
pub struct MemSource {
    pub reservations: Vec<Record>,
    pub calls: Vec<Record>,
    pub fail: Option<SourceTable>,
}

impl RecordSource for MemSource {
    fn fetch_table(&self, table: SourceTable, limit: usize) -> AppResult<Vec<Record>> {
        if self.fail == Some(table) {
            return Err(AppError::fetch(table.table_name(), "connection reset"));
        }
        let records = match table {
            SourceTable::Reservations => &self.reservations,
            SourceTable::CallLogs => &self.calls,
        };
        Ok(records.iter().take(limit).cloned().collect())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
