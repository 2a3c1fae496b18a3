// src/export/model.rs

use crate::models::NormalizedRow;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Column order of the CSV export.
pub const HEADERS: [&str; 10] = [
    "property_id",
    "kind",
    "time",
    "business_date",
    "guest",
    "arrival",
    "nights",
    "total",
    "sentiment",
    "summary",
];

/// Flat, all-text view of a row as it appears in exports.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub property_id: String,
    pub kind: String,
    pub time: String,
    pub business_date: String,
    pub guest: String,
    pub arrival: String,
    pub nights: String,
    pub total: String,
    pub sentiment: String,
    pub summary: String,
}

fn opt_num(v: Option<f64>, decimals: usize) -> String {
    v.map(|n| format!("{n:.decimals$}")).unwrap_or_default()
}

impl From<&NormalizedRow> for ExportRow {
    fn from(row: &NormalizedRow) -> Self {
        Self {
            property_id: row.property_id.clone(),
            kind: row.kind().as_str().to_string(),
            time: row
                .when
                .map(|w| w.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            business_date: row
                .business_date
                .map(|d| d.with_timezone(&Local).format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            guest: row.guest.clone(),
            arrival: row.arrival.clone(),
            nights: opt_num(row.nights, 0),
            total: opt_num(row.total_due, 2),
            sentiment: row.sentiment.clone(),
            summary: row.summary.clone(),
        }
    }
}

impl ExportRow {
    pub(crate) fn to_record(&self) -> [&str; 10] {
        [
            self.property_id.as_str(),
            self.kind.as_str(),
            self.time.as_str(),
            self.business_date.as_str(),
            self.guest.as_str(),
            self.arrival.as_str(),
            self.nights.as_str(),
            self.total.as_str(),
            self.sentiment.as_str(),
            self.summary.as_str(),
        ]
    }
}

pub(crate) fn rows_to_export(rows: &[NormalizedRow]) -> Vec<ExportRow> {
    rows.iter().map(ExportRow::from).collect()
}
