use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One loosely-typed source record, exactly as the store returned it.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The two remote tables the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    Reservations,
    CallLogs,
}

impl SourceTable {
    pub const ALL: [SourceTable; 2] = [SourceTable::Reservations, SourceTable::CallLogs];

    pub fn table_name(&self) -> &'static str {
        match self {
            SourceTable::Reservations => "reservations",
            SourceTable::CallLogs => "call_logs",
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for SourceTable {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reservations" | "reservation" | "bookings" => Ok(SourceTable::Reservations),
            "call_logs" | "calls" | "call-logs" => Ok(SourceTable::CallLogs),
            other => Err(AppError::UnknownTable(other.to_string())),
        }
    }
}
