//! Collapse rows that describe the same logical event.
//!
//! The same booking can reach us twice: once as a reservation row and once
//! as the booking payload of a call-log notification. There is no shared
//! identifier, so rows are compared by fingerprint.

use crate::models::{NormalizedRow, RowKind};
use chrono::SecondsFormat;
use std::collections::HashSet;

/// Kind used for fingerprinting: a call that carries a booking payload
/// announces that booking, so it fingerprints as one.
fn event_kind(row: &NormalizedRow) -> RowKind {
    match row.kind() {
        RowKind::Call if carries_booking(row) => RowKind::Booking,
        kind => kind,
    }
}

fn carries_booking(row: &NormalizedRow) -> bool {
    !row.guest.is_empty() || !row.arrival.is_empty() || row.total_due.is_some()
}

/// `kind|property|event|guest|arrival|room|total|when-to-the-second`
pub fn fingerprint(row: &NormalizedRow) -> String {
    let event = if row.kind().is_call() {
        row.event.as_str()
    } else {
        ""
    };
    let total = row.total_due.map(|t| format!("{t:.2}")).unwrap_or_default();
    let when = row
        .when
        .map(|w| w.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();

    [
        event_kind(row).as_str(),
        row.property_id.as_str(),
        event,
        row.guest.as_str(),
        row.arrival.as_str(),
        row.room_type.as_str(),
        total.as_str(),
        when.as_str(),
    ]
    .join("|")
}

/// Stable, first occurrence wins.
pub fn dedupe(rows: Vec<NormalizedRow>) -> Vec<NormalizedRow> {
    let mut seen = HashSet::with_capacity(rows.len());
    let before = rows.len();

    let out: Vec<NormalizedRow> = rows
        .into_iter()
        .filter(|r| seen.insert(fingerprint(r)))
        .collect();

    if out.len() < before {
        log::debug!("dedupe dropped {} duplicate row(s)", before - out.len());
    }
    out
}
