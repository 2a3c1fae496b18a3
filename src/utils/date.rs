use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD HH:MM` in local time, empty when absent.
pub fn local_stamp(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|d| d.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
