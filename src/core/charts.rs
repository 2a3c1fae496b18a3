//! Time-bucketed call and booking counts for the two dashboard charts.

use crate::models::{NormalizedRow, Range};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ranges longer than this are bucketed by month instead of by day.
pub const MAX_DAILY_BUCKETS: i64 = 62;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBucket {
    pub label: String,
    pub calls: usize,
    pub bookings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Charts {
    pub granularity: Granularity,
    pub buckets: Vec<ChartBucket>,
}

impl Charts {
    pub fn calls_series(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.calls).collect()
    }

    pub fn bookings_series(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.bookings).collect()
    }
}

fn local_day(row: &NormalizedRow) -> Option<NaiveDate> {
    row.effective_date()
        .map(|d| d.with_timezone(&Local).date_naive())
}

fn bucket_key(day: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Day => day,
        Granularity::Month => day.with_day(1).unwrap_or(day),
    }
}

fn bucket_label(key: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => key.format("%m-%d").to_string(),
        Granularity::Month => key.format("%Y-%m").to_string(),
    }
}

fn next_key(key: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
    match granularity {
        Granularity::Day => key.succ_opt(),
        Granularity::Month => {
            let (y, m) = if key.month() == 12 {
                (key.year() + 1, 1)
            } else {
                (key.year(), key.month() + 1)
            };
            NaiveDate::from_ymd_opt(y, m, 1)
        }
    }
}

/// Build both series over the range. Every bucket between the bounds is
/// present, empty ones included. For the unbounded range the bounds come
/// from the rows themselves.
pub fn build_charts(rows: &[NormalizedRow], range: &Range) -> Charts {
    let days: Vec<(NaiveDate, &NormalizedRow)> = rows
        .iter()
        .filter_map(|r| local_day(r).map(|d| (d, r)))
        .collect();

    let bounds = if range.is_active() {
        Some((
            range.start.with_timezone(&Local).date_naive(),
            range.end.with_timezone(&Local).date_naive(),
        ))
    } else {
        let first = days.iter().map(|(d, _)| *d).min();
        let last = days.iter().map(|(d, _)| *d).max();
        first.zip(last)
    };

    let Some((first, last)) = bounds else {
        return Charts {
            granularity: Granularity::Day,
            buckets: Vec::new(),
        };
    };

    let span = (last - first).num_days() + 1;
    let granularity = if span > MAX_DAILY_BUCKETS {
        Granularity::Month
    } else {
        Granularity::Day
    };

    let mut counts: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
    let mut key = bucket_key(first, granularity);
    let last_key = bucket_key(last, granularity);
    while key <= last_key {
        counts.insert(key, (0, 0));
        match next_key(key, granularity) {
            Some(k) => key = k,
            None => break,
        }
    }

    for (day, row) in days {
        if let Some(entry) = counts.get_mut(&bucket_key(day, granularity)) {
            if row.kind().is_call() {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    }

    Charts {
        granularity,
        buckets: counts
            .into_iter()
            .map(|(k, (calls, bookings))| ChartBucket {
                label: bucket_label(k, granularity),
                calls,
                bookings,
            })
            .collect(),
    }
}
