mod common;
use chrono::{Local, TimeZone};
use common::{booking, call_row, temp_home};
use opsdash::core::normalize::normalize_reservation;
use opsdash::export::logic::ExportLogic;
use opsdash::export::{ExportFormat, ExportRow, HEADERS, default_filename, read_csv_export};
use serde_json::json;
use std::fs;

fn rows() -> Vec<opsdash::models::NormalizedRow> {
    let mut raw = booking("Ana \"Nana\" Ruiz", "2025-04-02", "2025-03-10T14:22:05Z", "P1", json!("1,250.00"));
    raw.insert("summary".into(), json!("Asked for a \"quiet\" room, near lift"));
    vec![
        normalize_reservation(raw),
        call_row("2025-03-11 09:30:00", "P2", json!(95), "Line one\nline two"),
    ]
}

#[test]
fn csv_quotes_every_field_and_doubles_embedded_quotes() {
    let dir = temp_home("export_csv");
    let path = dir.join("out.csv");

    let written = ExportLogic::export(&rows(), ExportFormat::Csv, &path, false).unwrap();
    assert_eq!(written, 2);

    let content = fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    let expected: Vec<String> = HEADERS.iter().map(|h| format!("\"{h}\"")).collect();
    assert_eq!(header, expected.join(","));

    assert!(content.contains("\"Asked for a \"\"quiet\"\" room, near lift\""));
    assert!(content.contains("\"Ana \"\"Nana\"\" Ruiz\""));
    assert!(content.contains("\"1250.00\""));
    assert!(content.contains("\"2025-04-02\""));
}

#[test]
fn csv_export_reads_back_unchanged() {
    let dir = temp_home("export_roundtrip");
    let path = dir.join("out.csv");
    let source = rows();

    ExportLogic::export(&source, ExportFormat::Csv, &path, false).unwrap();
    let back = read_csv_export(&path).unwrap();

    let expected: Vec<ExportRow> = source.iter().map(ExportRow::from).collect();
    assert_eq!(back, expected);
    assert_eq!(back[0].kind, "booking");
    assert_eq!(back[0].nights, "2");
    assert_eq!(back[1].kind, "call");
    assert_eq!(back[1].total, "");
    assert_eq!(back[1].summary, "Line one\nline two");
}

#[test]
fn empty_export_still_writes_header() {
    let dir = temp_home("export_empty");
    let path = dir.join("empty.csv");

    assert_eq!(ExportLogic::export(&[], ExportFormat::Csv, &path, false).unwrap(), 0);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(read_csv_export(&path).unwrap().is_empty());
}

#[test]
fn existing_file_needs_force_when_not_interactive() {
    let dir = temp_home("export_force");
    let path = dir.join("out.csv");
    fs::write(&path, "keep me").unwrap();

    // cargo test runs without a terminal on stdin
    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        assert!(ExportLogic::export(&rows(), ExportFormat::Csv, &path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    ExportLogic::export(&rows(), ExportFormat::Csv, &path, true).unwrap();
    assert_eq!(read_csv_export(&path).unwrap().len(), 2);
}

#[test]
fn json_export_writes_an_array_of_rows() {
    let dir = temp_home("export_json");
    let path = dir.join("out.json");

    ExportLogic::export(&rows(), ExportFormat::Json, &path, false).unwrap();
    let back: Vec<ExportRow> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].guest, "Ana \"Nana\" Ruiz");
    assert_eq!(back[0].total, "1250.00");
}

#[test]
fn default_filename_is_timestamped() {
    let now = Local.with_ymd_and_hms(2025, 3, 10, 14, 22, 5).unwrap();
    assert_eq!(default_filename(now, ExportFormat::Csv), "opsdash-export-20250310-142205.csv");
    assert_eq!(default_filename(now, ExportFormat::Json), "opsdash-export-20250310-142205.json");

    let dir = std::path::Path::new("/tmp/exports");
    let resolved = ExportLogic::resolve_path(None, dir, ExportFormat::Csv);
    assert!(resolved.starts_with(dir));
    assert_eq!(
        ExportLogic::resolve_path(Some("mine.csv"), dir, ExportFormat::Csv),
        std::path::PathBuf::from("mine.csv")
    );
}
