//! Formatting helpers for KPI tiles, feed cells and exports.

/// Shown in place of a metric that is undefined.
pub const PLACEHOLDER: &str = "—";

pub fn fmt_money(amount: f64) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// `Some(0.4)` → `40.0%`
pub fn fmt_percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) if r.is_finite() => format!("{:.1}%", r * 100.0),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Seconds as `Mm SSs`.
pub fn fmt_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s.is_finite() && s >= 0.0 => {
            let total = s.round() as u64;
            format!("{}m {:02}s", total / 60, total % 60)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn fmt_optional_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Cut `s` to at most `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

