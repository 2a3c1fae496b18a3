// src/models/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::coerce::local_instant;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    Today,
    Last7,
    Last30,
    ThisMonth,
    All,
    Custom,
}

impl RangeMode {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "today" | "1d" => Some(RangeMode::Today),
            "7d" | "last7" | "week" => Some(RangeMode::Last7),
            "30d" | "last30" => Some(RangeMode::Last30),
            "month" | "this-month" | "mtd" => Some(RangeMode::ThisMonth),
            "all" => Some(RangeMode::All),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeMode::Today => "Today",
            RangeMode::Last7 => "Last 7 days",
            RangeMode::Last30 => "Last 30 days",
            RangeMode::ThisMonth => "This month",
            RangeMode::All => "All time",
            RangeMode::Custom => "Custom",
        }
    }
}

/// Inclusive date window applied to the feed.
///
/// `start` is 00:00:00.000 local time on the first day, `end` is
/// 23:59:59.999 local time on the last day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub mode: RangeMode,
}

impl Range {
    /// Build a preset range relative to `anchor` (usually today).
    pub fn compute(mode: RangeMode, anchor: NaiveDate) -> AppResult<Self> {
        let (first, last) = match mode {
            RangeMode::Today => (anchor, anchor),
            RangeMode::Last7 => (anchor - Duration::days(6), anchor),
            RangeMode::Last30 => (anchor - Duration::days(29), anchor),
            RangeMode::ThisMonth => {
                let first = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1)
                    .ok_or_else(|| AppError::InvalidRange(anchor.to_string()))?;
                (first, anchor)
            }
            RangeMode::All => return Ok(Self::all()),
            RangeMode::Custom => {
                return Err(AppError::InvalidRange(
                    "custom ranges need explicit bounds".to_string(),
                ));
            }
        };

        Self::from_days(mode, mode.label().to_string(), first, last)
    }

    /// Custom window from two calendar days (order-insensitive).
    pub fn custom(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        let (first, last) = if from <= to { (from, to) } else { (to, from) };
        let label = if first == last {
            first.format("%Y-%m-%d").to_string()
        } else {
            format!("{} → {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"))
        };
        Self::from_days(RangeMode::Custom, label, first, last)
    }

    /// Range that lets every row through.
    pub fn all() -> Self {
        Self {
            label: RangeMode::All.label().to_string(),
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
            mode: RangeMode::All,
        }
    }

    /// Parse a `--range` argument.
    ///
    /// Accepts the presets (`today`, `7d`, `30d`, `month`, `all`) and the
    /// calendar forms:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - YYYY:YYYY
    /// - YYYY-MM:YYYY-MM
    /// - YYYY-MM-DD:YYYY-MM-DD
    pub fn parse(spec: &str, anchor: NaiveDate) -> AppResult<Self> {
        if let Some(mode) = RangeMode::from_str_opt(spec) {
            return Self::compute(mode, anchor);
        }

        let (first, last) = parse_calendar_bounds(spec.trim())?;
        Self::custom(first, last)
    }

    /// True unless this range admits everything.
    pub fn is_active(&self) -> bool {
        self.mode != RangeMode::All
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Calendar days covered, inclusive. `None` for the unbounded range.
    pub fn span_days(&self) -> Option<i64> {
        if !self.is_active() {
            return None;
        }
        Some(self.end.signed_duration_since(self.start).num_days() + 1)
    }

    fn from_days(mode: RangeMode, label: String, first: NaiveDate, last: NaiveDate) -> AppResult<Self> {
        let start = local_instant(first.and_time(NaiveTime::MIN))
            .ok_or_else(|| AppError::InvalidRange(format!("no local midnight on {first}")))?;
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| AppError::Other("invalid end-of-day time".to_string()))?;
        let end = local_instant(last.and_time(end_of_day))
            .ok_or_else(|| AppError::InvalidRange(format!("no end of day on {last}")))?;

        Ok(Self {
            label,
            start,
            end,
            mode,
        })
    }
}

fn parse_calendar_bounds(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".to_string(),
            ));
        }

        let (first, _) = period_bounds(start)?;
        let (_, last) = period_bounds(end)?;
        Ok((first, last))
    } else {
        period_bounds(r)
    }
}

/// First and last day of a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last = month_last_day(d1.year(), d1.month()).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(d1.year(), d1.month(), last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!("unsupported range format: {p}"))),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
