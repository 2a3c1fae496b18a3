//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// SGR color/style sequences such as `\x1b[1;32m`.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Left-align `s` to `width` terminal columns. ANSI escapes are not counted.
fn pad_cell(s: &str, width: usize) -> String {
    let visible = strip_ansi(s).width();
    let pad = width.saturating_sub(visible);
    format!("{s}{}", " ".repeat(pad))
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(s, "")
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_cell(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
