//! Best-effort coercion of loosely-typed record values.
//!
//! Nothing in here returns an error: a value that cannot be understood becomes
//! `None`, which callers treat as "absent" (distinct from zero or the empty
//! string).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Everything that is not a digit, a dot or a minus sign.
static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// Short UTC offsets such as `+00` or `-05` at the end of a timestamp.
static SHORT_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]\d{2})$").unwrap());

/// Compact offsets such as `+0530` at the end of a timestamp.
static COMPACT_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]\d{2})(\d{2})$").unwrap());

const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Render any value as plain text. `null` becomes the empty string.
pub fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Coerce a value to a finite number.
///
/// Strings are stripped of every character except digits, `.` and `-`
/// before parsing, so `"1,250.00"` and `"$ 99"` both work.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => number_from_str(s),
        _ => None,
    }
}

pub fn number_from_str(s: &str) -> Option<f64> {
    let cleaned = NON_NUMERIC.replace_all(s, "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Coerce a value to an instant. JSON numbers are read as epoch milliseconds.
pub fn parse_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    }
}

/// Parse a date or timestamp in any of the formats the record sources emit.
///
/// Order matters: `DD-MM-YYYY` first, then `YYYY-MM-DD`, then timestamps with
/// a trailing offset, then the generic fallbacks. Plain dates resolve to
/// local midnight.
pub fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%d-%m-%Y") {
        return local_midnight(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_midnight(d);
    }

    if let Some(dt) = parse_with_offset(s) {
        return Some(dt);
    }

    generic_parse(s)
}

fn parse_with_offset(s: &str) -> Option<DateTime<Utc>> {
    let normalized = s.replacen(' ', "T", 1);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    // `+0530` → `+05:30`, `+00` → `+00:00`
    let expanded = if COMPACT_OFFSET.is_match(&normalized) && has_time_part(&normalized) {
        COMPACT_OFFSET.replace(&normalized, "$1:$2").to_string()
    } else if SHORT_OFFSET.is_match(&normalized) && has_time_part(&normalized) {
        SHORT_OFFSET.replace(&normalized, "$1:00").to_string()
    } else {
        return None;
    };

    DateTime::parse_from_rfc3339(&expanded)
        .ok()
        .or_else(|| DateTime::parse_from_str(&expanded, "%Y-%m-%dT%H:%M%:z").ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn has_time_part(s: &str) -> bool {
    s.find('T').is_some_and(|i| s[i..].contains(':'))
}

fn generic_parse(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_instant(ndt);
        }
    }

    for fmt in ["%d/%m/%Y", "%Y/%m/%d", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return local_midnight(d);
        }
    }

    None
}

/// Resolve a local wall-clock time to an instant; ambiguous times (DST fold)
/// take the earlier instant, non-existent ones are absent.
pub fn local_instant(ndt: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&ndt)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn local_midnight(d: NaiveDate) -> Option<DateTime<Utc>> {
    local_instant(d.and_hms_opt(0, 0, 0)?)
}
