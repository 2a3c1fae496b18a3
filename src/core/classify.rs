use crate::models::{EventClass, NormalizedRow, RowKind};

const ESCALATION_KEYWORDS: [&str; 3] = ["escalat", "urgent", "911"];

pub fn is_escalation(summary: &str) -> bool {
    let s = summary.to_lowercase();
    ESCALATION_KEYWORDS.iter().any(|k| s.contains(k))
}

/// Feed label. Display-only, never stored.
pub fn classify(row: &NormalizedRow) -> EventClass {
    if is_escalation(&row.summary) {
        return EventClass::Escalation;
    }
    match row.kind() {
        RowKind::Booking => EventClass::Booking,
        RowKind::Call => EventClass::Call,
    }
}
