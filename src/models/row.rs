use super::record::Record;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Booking,
    Call,
}

impl RowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Booking => "booking",
            RowKind::Call => "call",
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, RowKind::Call)
    }
}

/// A booking or a call, flattened to one shape.
///
/// `None` marks an absent value: it never means zero. `kind` and `raw` are
/// only readable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    kind: RowKind,
    pub when: Option<DateTime<Utc>>,
    pub business_date: Option<DateTime<Utc>>,
    pub guest: String,
    pub arrival: String,
    pub nights: Option<f64>,
    pub total_due: Option<f64>,
    pub sentiment: String,
    pub duration: Option<f64>,
    pub summary: String,
    pub property_id: String,
    pub room_type: String,
    pub event: String,
    raw: Record,
}

impl NormalizedRow {
    /// Empty row of the given kind wrapping `raw`; the normalizer fills the rest.
    pub fn new(kind: RowKind, raw: Record) -> Self {
        Self {
            kind,
            when: None,
            business_date: None,
            guest: String::new(),
            arrival: String::new(),
            nights: None,
            total_due: None,
            sentiment: String::new(),
            duration: None,
            summary: String::new(),
            property_id: String::new(),
            room_type: String::new(),
            event: String::new(),
            raw,
        }
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn raw(&self) -> &Record {
        &self.raw
    }

    /// Instant used for range checks: the business date, else creation time.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.business_date.or(self.when)
    }
}
