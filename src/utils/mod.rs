pub mod coerce;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::{PLACEHOLDER, fmt_duration, fmt_money, fmt_percent};
