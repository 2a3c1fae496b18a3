mod common;
use chrono::{Duration, NaiveDate};
use common::{booking_row, call_row};
use opsdash::core::filter::{ALL_PROPERTIES, filter_rows, matches_property, matches_range, matches_search};
use opsdash::core::normalize::normalize_reservation;
use opsdash::models::{NormalizedRow, Range, RangeMode};
use serde_json::json;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn days_before(n: i64) -> String {
    (anchor() - Duration::days(n)).format("%Y-%m-%d").to_string()
}

fn sample() -> Vec<NormalizedRow> {
    vec![
        booking_row("Ana Ruiz", &days_before(1), "2025-06-01T10:00:00Z", "P1", json!(300)),
        call_row("2025-06-14 09:00:00", "P2", json!(120), "Asked about parking"),
        booking_row("Bo Chen", &days_before(3), "2025-06-02T10:00:00Z", "P2", json!(180)),
        call_row("2025-06-13 18:30:00", "P1", json!(45), "URGENT: water leak in 204"),
        call_row("2025-05-01 12:00:00", "P1", json!(90), "Old enquiry"),
    ]
}

#[test]
fn last_seven_days_excludes_day_eight_and_includes_day_six() {
    let range = Range::compute(RangeMode::Last7, anchor()).unwrap();
    assert_eq!(range.label, "Last 7 days");

    let rows = vec![
        booking_row("Eight", &days_before(8), "", "P1", json!(1)),
        booking_row("Six", &days_before(6), "", "P1", json!(1)),
        booking_row("Seven", &days_before(7), "", "P1", json!(1)),
        booking_row("Today", &days_before(0), "", "P1", json!(1)),
    ];

    let kept: Vec<String> = filter_rows(&rows, &range, ALL_PROPERTIES, "")
        .into_iter()
        .map(|r| r.guest)
        .collect();
    assert_eq!(kept, vec!["Six".to_string(), "Today".to_string()]);
}

#[test]
fn range_bounds_are_inclusive_day_boundaries() {
    let range = Range::custom(anchor(), anchor()).unwrap();
    assert!(range.contains(range.start));
    assert!(range.contains(range.end));
    assert!(!range.contains(range.start - Duration::milliseconds(1)));
    assert!(!range.contains(range.end + Duration::milliseconds(1)));
    assert_eq!(range.end - range.start, Duration::days(1) - Duration::milliseconds(1));
}

#[test]
fn rows_without_any_date_are_excluded_by_active_range() {
    let undated = normalize_reservation(common::record(json!({"guest_name": "Nobody"})));
    let range = Range::compute(RangeMode::Last30, anchor()).unwrap();

    assert!(!matches_range(&undated, &range));
    assert!(matches_range(&undated, &Range::all()));
}

#[test]
fn call_rows_fall_back_to_creation_time() {
    let range = Range::compute(RangeMode::Today, anchor()).unwrap();
    let inside = call_row("2025-06-15 23:59:00", "P1", json!(1), "");
    let outside = call_row("2025-06-16 00:00:00", "P1", json!(1), "");

    assert!(matches_range(&inside, &range));
    assert!(!matches_range(&outside, &range));
}

#[test]
fn property_filter_is_exact_and_all_disables_it() {
    let row = call_row("2025-06-14 09:00:00", "P1", json!(1), "");
    assert!(matches_property(&row, "P1"));
    assert!(!matches_property(&row, "p1"));
    assert!(!matches_property(&row, "P"));
    assert!(matches_property(&row, ALL_PROPERTIES));
}

#[test]
fn search_is_case_insensitive_and_covers_raw_fields() {
    let mut raw = common::call("2025-06-14 09:00:00", "P1", json!(1), "Parking");
    raw.insert("agent".into(), json!("Marisol"));
    let row = opsdash::core::normalize::normalize_call(raw);

    assert!(matches_search(&row, "parking"));
    assert!(matches_search(&row, "MARISOL"));
    assert!(matches_search(&row, ""));
    assert!(matches_search(&row, "   "));
    assert!(!matches_search(&row, "spa booking"));
}

#[test]
fn filters_compose_as_and_and_preserve_order() {
    let rows = sample();
    let range = Range::compute(RangeMode::Last7, anchor()).unwrap();

    let all_in_range = filter_rows(&rows, &range, ALL_PROPERTIES, "");
    let guests_or_summaries: Vec<String> = all_in_range
        .iter()
        .map(|r| format!("{}{}", r.guest, r.summary))
        .collect();
    assert_eq!(all_in_range.len(), 4);
    assert!(guests_or_summaries[0].starts_with("Ana Ruiz"));
    assert!(guests_or_summaries[3].contains("URGENT"));

    let result = filter_rows(&rows, &range, "P1", "urgent");
    assert_eq!(result.len(), 1);
    for row in &result {
        assert!(matches_range(row, &range));
        assert!(matches_property(row, "P1"));
        assert!(matches_search(row, "urgent"));
    }

    // every property/search combination only yields rows satisfying each predicate
    for property in [ALL_PROPERTIES, "P1", "P2", "P3"] {
        for search in ["", "ana", "p1", "leak", "zzz"] {
            let out = filter_rows(&rows, &range, property, search);
            let positions: Vec<usize> = out
                .iter()
                .map(|r| rows.iter().position(|x| x == r).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for row in &out {
                assert!(matches_range(row, &range));
                assert!(matches_property(row, property));
                assert!(matches_search(row, search));
            }
        }
    }
}

#[test]
fn range_parse_accepts_presets_and_calendar_forms() {
    assert_eq!(Range::parse("7d", anchor()).unwrap().mode, RangeMode::Last7);
    assert_eq!(Range::parse("all", anchor()).unwrap().mode, RangeMode::All);

    let month = Range::parse("2025-02", anchor()).unwrap();
    assert_eq!(month.mode, RangeMode::Custom);
    assert_eq!(month.span_days(), Some(28));

    let span = Range::parse("2025-01-01:2025-01-10", anchor()).unwrap();
    assert_eq!(span.span_days(), Some(10));

    let this_month = Range::compute(RangeMode::ThisMonth, anchor()).unwrap();
    assert_eq!(this_month.span_days(), Some(15));

    assert!(Range::parse("2025-01:2025", anchor()).is_err());
    assert!(Range::parse("yesterday-ish", anchor()).is_err());
    assert_eq!(Range::all().span_days(), None);
}
