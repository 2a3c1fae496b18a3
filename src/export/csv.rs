use crate::errors::AppResult;
use crate::export::model::{ExportRow, HEADERS};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Write rows as CSV. Every field is quoted; embedded quotes are doubled.
pub(crate) fn export_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path, rows.len());
    Ok(())
}

/// Read a CSV export back.
pub fn read_csv_export(path: &Path) -> AppResult<Vec<ExportRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}
