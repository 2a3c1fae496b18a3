// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;

pub use csv::read_csv_export;
pub use logic::{ExportLogic, default_filename};
pub use model::{ExportRow, HEADERS};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for the exporters.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!("{label} export completed ({rows} rows): {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
