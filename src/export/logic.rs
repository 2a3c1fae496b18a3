// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::rows_to_export;
use crate::models::NormalizedRow;
use crate::ui::messages::warning;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// `opsdash-export-YYYYMMDD-HHMMSS.<ext>`
pub fn default_filename(now: DateTime<Local>, format: ExportFormat) -> String {
    format!(
        "opsdash-export-{}.{}",
        now.format("%Y%m%d-%H%M%S"),
        format.as_str()
    )
}

pub struct ExportLogic;

impl ExportLogic {
    /// Resolve the output path: explicit file, or a timestamped name in `dir`.
    pub fn resolve_path(file: Option<&str>, dir: &Path, format: ExportFormat) -> PathBuf {
        match file {
            Some(f) => PathBuf::from(f),
            None => dir.join(default_filename(Local::now(), format)),
        }
    }

    /// Write the (already filtered and deduplicated) rows.
    /// Returns the number of rows written.
    pub fn export(
        rows: &[NormalizedRow],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        if rows.is_empty() {
            warning("No rows match the current filters; writing header only.");
        }

        let export_rows = rows_to_export(rows);
        match format {
            ExportFormat::Csv => export_csv(&export_rows, path)?,
            ExportFormat::Json => export_json(&export_rows, path)?,
        }

        Ok(export_rows.len())
    }
}
