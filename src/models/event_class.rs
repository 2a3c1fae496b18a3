use serde::Serialize;
use std::fmt;

/// Display label of a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventClass {
    Escalation,
    Booking,
    Call,
}

impl EventClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventClass::Escalation => "escalation",
            EventClass::Booking => "booking",
            EventClass::Call => "call",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
