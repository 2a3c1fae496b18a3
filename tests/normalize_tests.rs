mod common;
use chrono::{NaiveDate, TimeZone, Utc};
use common::{booking, call, record};
use opsdash::core::normalize::{embedded_booking, normalize_all, normalize_call, normalize_record, normalize_reservation};
use opsdash::models::{RowKind, SourceTable};
use opsdash::utils::coerce::local_midnight;
use serde_json::json;

#[test]
fn reservation_maps_to_booking_row() {
    let raw = booking("Ana Ruiz", "02-04-2025", "2025-03-10T14:22:05Z", "P1", json!("1,250.00"));
    let row = normalize_reservation(raw.clone());

    assert_eq!(row.kind(), RowKind::Booking);
    assert_eq!(row.when, Some(Utc.with_ymd_and_hms(2025, 3, 10, 14, 22, 5).unwrap()));
    assert_eq!(
        row.business_date,
        local_midnight(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())
    );
    assert_eq!(row.guest, "Ana Ruiz");
    assert_eq!(row.arrival, "02-04-2025");
    assert_eq!(row.nights, Some(2.0));
    assert_eq!(row.total_due, Some(1250.0));
    assert_eq!(row.room_type, "Double");
    assert_eq!(row.property_id, "P1");
    assert_eq!(row.raw(), &raw);
}

#[test]
fn reservation_without_summary_gets_generated_one() {
    let row = normalize_reservation(booking("Ana Ruiz", "2025-04-02", "2025-03-10", "P1", json!(10)));
    assert_eq!(row.summary, "Reservation for Ana Ruiz • Arrive 2025-04-02");

    let mut raw = booking("Ana Ruiz", "2025-04-02", "2025-03-10", "P1", json!(10));
    raw.insert("summary".into(), json!("VIP, wants late checkout"));
    assert_eq!(normalize_reservation(raw).summary, "VIP, wants late checkout");
}

#[test]
fn reservation_with_unreadable_fields_keeps_them_absent() {
    let row = normalize_reservation(record(json!({
        "guest_name": "Bo",
        "arrival_date": "soon",
        "total_due": "call us",
        "nights": null,
    })));

    assert_eq!(row.kind(), RowKind::Booking);
    assert_eq!(row.when, None);
    assert_eq!(row.business_date, None);
    assert_eq!(row.total_due, None);
    assert_eq!(row.nights, None);
    assert_eq!(row.arrival, "soon");
}

#[test]
fn call_reads_serialized_booking_payload() {
    let mut raw = call("2025-03-10 14:22:05+00", "P1", json!("185"), "Guest booked a double");
    raw.insert(
        "booking".into(),
        json!(r#"{"guest_name":"Ana Ruiz","arrival_date":"2025-04-02","nights":"3","total_due":"1,250.00","room_type":"Deluxe","event":"booking_created"}"#),
    );

    let row = normalize_call(raw);
    assert_eq!(row.kind(), RowKind::Call);
    assert_eq!(row.business_date, row.when);
    assert_eq!(row.when, Some(Utc.with_ymd_and_hms(2025, 3, 10, 14, 22, 5).unwrap()));
    assert_eq!(row.duration, Some(185.0));
    assert_eq!(row.sentiment, "neutral");
    assert_eq!(row.guest, "Ana Ruiz");
    assert_eq!(row.arrival, "2025-04-02");
    assert_eq!(row.nights, Some(3.0));
    assert_eq!(row.total_due, Some(1250.0));
    assert_eq!(row.room_type, "Deluxe");
    assert_eq!(row.event, "booking_created");
}

#[test]
fn call_accepts_booking_payload_as_object() {
    let mut raw = call("2025-03-10T14:22:05Z", "P1", json!(60), "");
    raw.insert("booking".into(), json!({"guest": "Lee", "total_due": 99}));

    let row = normalize_call(raw);
    assert_eq!(row.guest, "Lee");
    assert_eq!(row.total_due, Some(99.0));
}

#[test]
fn malformed_booking_payloads_leave_derived_fields_absent() {
    let payloads = [
        json!("{not json"),
        json!(""),
        json!("null"),
        json!("[1,2,3]"),
        json!("\"just a string\""),
        json!(42),
        json!(null),
        json!([{"guest_name": "x"}]),
    ];

    for payload in payloads {
        let mut raw = call("2025-03-10T14:22:05Z", "P1", json!(30), "hello");
        raw.insert("booking".into(), payload.clone());

        assert_eq!(embedded_booking(&raw), None, "payload {payload}");
        let row = normalize_call(raw);
        assert_eq!(row.guest, "", "payload {payload}");
        assert_eq!(row.arrival, "");
        assert_eq!(row.nights, None);
        assert_eq!(row.total_due, None);
        assert_eq!(row.summary, "hello");
        assert_eq!(row.duration, Some(30.0));
    }
}

#[test]
fn call_without_booking_field_still_normalizes() {
    let row = normalize_call(call("garbage", "P9", json!("n/a"), "Wrong number"));
    assert_eq!(row.kind(), RowKind::Call);
    assert_eq!(row.when, None);
    assert_eq!(row.business_date, None);
    assert_eq!(row.duration, None);
    assert_eq!(row.property_id, "P9");
}

#[test]
fn normalize_all_keeps_reservations_before_calls() {
    let rows = normalize_all(
        vec![booking("A", "2025-04-02", "2025-03-10", "P1", json!(1))],
        vec![
            call("2025-03-11", "P1", json!(1), "one"),
            call("2025-03-12", "P1", json!(1), "two"),
        ],
    );

    let kinds: Vec<RowKind> = rows.iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![RowKind::Booking, RowKind::Call, RowKind::Call]);
    assert_eq!(rows[2].summary, "two");

    let by_table = normalize_record(SourceTable::CallLogs, call("2025-03-11", "P1", json!(1), "x"));
    assert_eq!(by_table.kind(), RowKind::Call);
}
