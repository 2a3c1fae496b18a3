use crate::errors::AppResult;
use crate::export::model::ExportRow;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, rows.len());
    Ok(())
}
