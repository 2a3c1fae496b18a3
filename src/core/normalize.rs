//! Map reservation and call-log records onto `NormalizedRow`.
//!
//! Every record yields exactly one row. Fields that cannot be read are left
//! absent; a bad field never rejects the whole record.

use crate::models::{NormalizedRow, Record, RowKind, SourceTable};
use crate::utils::coerce::{parse_date, text, to_number};
use serde_json::Value;

/// First non-empty text among `keys`.
fn first_text(record: &Record, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| text(record.get(*k)))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn first_number(record: &Record, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| to_number(record.get(*k)))
}

pub fn normalize_reservation(record: Record) -> NormalizedRow {
    let guest = first_text(&record, &["guest_name", "guest"]);
    let arrival = text(record.get("arrival_date"));
    let source_summary = text(record.get("summary"));

    let mut row = NormalizedRow::new(RowKind::Booking, record);
    row.when = parse_date(row.raw().get("created_at"));
    row.business_date = parse_date(row.raw().get("arrival_date"));
    row.nights = to_number(row.raw().get("nights"));
    row.total_due = to_number(row.raw().get("total_due"));
    row.room_type = text(row.raw().get("room_type"));
    row.property_id = text(row.raw().get("property_id"));
    row.summary = if source_summary.is_empty() {
        format!("Reservation for {guest} • Arrive {arrival}")
    } else {
        source_summary
    };
    row.guest = guest;
    row.arrival = arrival;
    row
}

/// Decode the `booking` payload carried by a call record.
///
/// The payload is usually a JSON string; some sources already deliver an
/// object. Anything else (missing, malformed, not an object) is `None`.
pub fn embedded_booking(record: &Record) -> Option<Record> {
    match record.get("booking")? {
        Value::Object(map) => Some(map.clone()),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => None,
            Err(e) => {
                log::debug!("ignoring malformed booking payload: {e}");
                None
            }
        },
        _ => None,
    }
}

pub fn normalize_call(record: Record) -> NormalizedRow {
    let booking = embedded_booking(&record);

    let mut row = NormalizedRow::new(RowKind::Call, record);
    row.when = parse_date(row.raw().get("created_at"));
    row.business_date = row.when;
    row.sentiment = text(row.raw().get("sentiment"));
    row.duration = first_number(row.raw(), &["duration", "duration_seconds"]);
    row.summary = text(row.raw().get("summary"));
    row.property_id = text(row.raw().get("property_id"));

    if let Some(b) = booking {
        row.guest = first_text(&b, &["guest_name", "guest"]);
        row.arrival = text(b.get("arrival_date"));
        row.nights = to_number(b.get("nights"));
        row.total_due = to_number(b.get("total_due"));
        row.room_type = text(b.get("room_type"));
        row.event = text(b.get("event"));
    }

    row
}

pub fn normalize_record(table: SourceTable, record: Record) -> NormalizedRow {
    match table {
        SourceTable::Reservations => normalize_reservation(record),
        SourceTable::CallLogs => normalize_call(record),
    }
}

/// Reservations first, then calls, each in source order.
pub fn normalize_all(reservations: Vec<Record>, calls: Vec<Record>) -> Vec<NormalizedRow> {
    reservations
        .into_iter()
        .map(normalize_reservation)
        .chain(calls.into_iter().map(normalize_call))
        .collect()
}
