use crate::core::classify::classify;
use crate::models::{EventClass, NormalizedRow};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub class: EventClass,
    pub row: NormalizedRow,
}

/// Newest first; rows without a creation time sink to the bottom.
fn newest_first(a: &NormalizedRow, b: &NormalizedRow) -> Ordering {
    match (a.when, b.when) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn build_feed(rows: &[NormalizedRow], limit: usize) -> Vec<FeedEntry> {
    let mut sorted: Vec<&NormalizedRow> = rows.iter().collect();
    sorted.sort_by(|a, b| newest_first(a, b));

    sorted
        .into_iter()
        .take(limit)
        .map(|row| FeedEntry {
            class: classify(row),
            row: row.clone(),
        })
        .collect()
}
