//! Terminal rendering of the dashboard: KPI tiles, the two chart series and
//! the feed table. Everything renders to a `String` so output can be tested.

use crate::core::charts::{Charts, Granularity};
use crate::core::feed::FeedEntry;
use crate::core::filter::ALL_PROPERTIES;
use crate::core::pipeline::{DashboardView, LoadStatus};
use crate::models::{EventClass, Kpis};
use crate::state::Theme;
use crate::utils::colors::{GREEN, Palette};
use crate::utils::date::local_stamp;
use crate::utils::formatting::{fmt_duration, fmt_money, fmt_optional_number, fmt_percent, truncate};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;
const TILE_WIDTH: usize = 18;

/// Label/value pairs of the five KPI tiles.
pub fn kpi_tiles(kpis: &Kpis) -> Vec<(&'static str, String)> {
    vec![
        ("Calls", kpis.total_calls.to_string()),
        ("Bookings", kpis.total_bookings.to_string()),
        ("Conversion", fmt_percent(kpis.conversion_rate)),
        ("Avg call", fmt_duration(kpis.avg_call_duration)),
        ("Revenue", fmt_money(kpis.total_revenue)),
    ]
}

pub fn render_kpis(kpis: &Kpis, palette: &Palette) -> String {
    let tiles = kpi_tiles(kpis);
    let mut labels = String::new();
    let mut values = String::new();

    for (label, value) in &tiles {
        labels.push_str(&palette.paint(palette.muted, &format!("{label:<TILE_WIDTH$}")));
        values.push_str(&palette.paint(palette.text, &format!("{value:<TILE_WIDTH$}")));
    }

    format!("{}\n{}\n", labels.trim_end(), values.trim_end())
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let len = ((count as f64 / max as f64) * BAR_WIDTH as f64).ceil() as usize;
    "█".repeat(len.clamp(1, BAR_WIDTH))
}

fn render_series(title: &str, labels: &[&str], counts: &[usize], color: &str, palette: &Palette) -> String {
    let max = counts.iter().copied().max().unwrap_or(0);
    let mut out = format!("{}\n", palette.paint(palette.accent, title));

    for (label, count) in labels.iter().zip(counts) {
        out.push_str(&format!(
            "  {label:>7} {} {count}\n",
            palette.paint(color, &format!("{:<BAR_WIDTH$}", bar(*count, max)))
        ));
    }
    out
}

pub fn render_charts(charts: &Charts, palette: &Palette) -> String {
    if charts.buckets.is_empty() {
        return palette.paint(palette.muted, "No dated activity in range.\n");
    }

    let unit = match charts.granularity {
        Granularity::Day => "day",
        Granularity::Month => "month",
    };
    let labels: Vec<&str> = charts.buckets.iter().map(|b| b.label.as_str()).collect();

    let mut out = render_series(
        &format!("Calls per {unit}"),
        &labels,
        &charts.calls_series(),
        palette.accent,
        palette,
    );
    out.push('\n');
    out.push_str(&render_series(
        &format!("Bookings per {unit}"),
        &labels,
        &charts.bookings_series(),
        if palette.reset.is_empty() { "" } else { GREEN },
        palette,
    ));
    out
}

pub fn render_feed(feed: &[FeedEntry], palette: &Palette) -> String {
    if feed.is_empty() {
        return palette.paint(palette.muted, "No events match the current filters.\n");
    }

    let mut table = Table::new(vec![
        Column::new("TIME", 16),
        Column::new("TYPE", 10),
        Column::new("PROPERTY", 10),
        Column::new("GUEST", 18),
        Column::new("ARRIVAL", 10),
        Column::new("NIGHTS", 6),
        Column::new("TOTAL", 11),
        Column::new("SENTIMENT", 9),
        Column::new("SUMMARY", 40),
    ]);

    for entry in feed {
        let row = &entry.row;
        let total = row.total_due.map(fmt_money).unwrap_or_default();
        let nights = if row.nights.is_some() {
            fmt_optional_number(row.nights)
        } else {
            String::new()
        };

        table.add_row(vec![
            local_stamp(row.when),
            palette.paint(palette.class_color(entry.class), entry.class.as_str()),
            truncate(&row.property_id, 10),
            truncate(&row.guest, 18),
            truncate(&row.arrival, 10),
            nights,
            total,
            palette.paint(palette.sentiment_color(&row.sentiment), &truncate(&row.sentiment, 9)),
            truncate(&row.summary.replace('\n', " "), 40),
        ]);
    }

    table.render()
}

fn render_header(view: &DashboardView, palette: &Palette) -> String {
    let property = if view.property == ALL_PROPERTIES {
        "all properties".to_string()
    } else {
        view.property.clone()
    };

    let mut out = format!(
        "{} {} · {} · {}/{} rows",
        palette.paint(palette.accent, "▌Operations"),
        view.range.label,
        property,
        view.visible,
        view.loaded,
    );
    if !view.search.trim().is_empty() {
        out.push_str(&format!(" · search \"{}\"", view.search.trim()));
    }
    out.push('\n');

    if let LoadStatus::Failed(msg) = &view.status {
        out.push_str(&palette.paint(
            palette.class_color(EventClass::Escalation),
            &format!("load error: {msg} (showing previous data)\n"),
        ));
    }
    out
}

pub fn render_dashboard(view: &DashboardView, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let mut out = render_header(view, &palette);
    out.push('\n');
    out.push_str(&render_kpis(&view.kpis, &palette));
    out.push('\n');
    out.push_str(&render_charts(&view.charts, &palette));
    out.push('\n');
    out.push_str(&render_feed(&view.feed, &palette));
    out
}
