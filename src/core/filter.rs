use crate::models::{NormalizedRow, Range};

/// Property selector value that disables the property predicate.
pub const ALL_PROPERTIES: &str = "__all__";

pub fn matches_property(row: &NormalizedRow, property: &str) -> bool {
    property == ALL_PROPERTIES || row.property_id == property
}

/// Rows without any date never match an active range.
pub fn matches_range(row: &NormalizedRow, range: &Range) -> bool {
    if !range.is_active() {
        return true;
    }
    row.effective_date().is_some_and(|d| range.contains(d))
}

/// Case-insensitive substring match on the serialized row, `raw` included.
pub fn matches_search(row: &NormalizedRow, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    match serde_json::to_string(row) {
        Ok(haystack) => haystack.to_lowercase().contains(&needle),
        Err(e) => {
            log::warn!("row could not be serialized for search: {e}");
            false
        }
    }
}

/// Keep the rows that satisfy the range, property and search predicates.
/// Input order is preserved.
pub fn filter_rows(
    rows: &[NormalizedRow],
    range: &Range,
    property: &str,
    search: &str,
) -> Vec<NormalizedRow> {
    rows.iter()
        .filter(|r| matches_property(r, property))
        .filter(|r| matches_range(r, range))
        .filter(|r| matches_search(r, search))
        .cloned()
        .collect()
}
