//! Application state and the filter → dedupe → aggregate pipeline.
//!
//! `AppState` is an explicit value owned by the caller: the command handlers
//! create it, feed it load results and read views from it.

use crate::core::aggregate::aggregate;
use crate::core::charts::{Charts, build_charts};
use crate::core::dedupe::dedupe;
use crate::core::feed::{FeedEntry, build_feed};
use crate::core::filter::{ALL_PROPERTIES, filter_rows};
use crate::errors::AppResult;
use crate::models::{Kpis, NormalizedRow, Range};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Ticket handed out when a load starts. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started after this one; its result was dropped.
    Stale,
    /// The load failed; previously loaded rows are kept.
    Failed,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub range: Range,
    pub property: String,
    pub search: String,
    pub status: LoadStatus,
    pub kpis: Kpis,
    pub charts: Charts,
    pub feed: Vec<FeedEntry>,
    pub visible: usize,
    pub loaded: usize,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    rows: Vec<NormalizedRow>,
    pub range: Range,
    pub property: String,
    pub search: String,
    pub status: LoadStatus,
    issued: u64,
}

impl AppState {
    pub fn new(range: Range) -> Self {
        Self {
            rows: Vec::new(),
            range,
            property: ALL_PROPERTIES.to_string(),
            search: String::new(),
            status: LoadStatus::Idle,
            issued: 0,
        }
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    /// Start a load. Any result carrying an older token is discarded.
    pub fn begin_load(&mut self) -> LoadToken {
        self.issued += 1;
        self.status = LoadStatus::Loading;
        LoadToken(self.issued)
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.issued
    }

    /// Apply the result of the load identified by `token`.
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        result: AppResult<Vec<NormalizedRow>>,
    ) -> LoadOutcome {
        if !self.is_current(token) {
            log::debug!(
                "dropping stale load result (token {} < {})",
                token.0,
                self.issued
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(rows) => {
                log::info!("load {} applied: {} row(s)", token.0, rows.len());
                self.rows = rows;
                self.status = LoadStatus::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                log::error!("load {} failed: {e}", token.0);
                self.status = LoadStatus::Failed(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Rows after filtering and deduplication, in load order.
    pub fn visible_rows(&self) -> Vec<NormalizedRow> {
        dedupe(filter_rows(
            &self.rows,
            &self.range,
            &self.property,
            &self.search,
        ))
    }

    /// Distinct property ids among the loaded rows, sorted.
    pub fn known_properties(&self) -> Vec<String> {
        let mut props: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.property_id.clone())
            .filter(|p| !p.is_empty())
            .collect();
        props.sort();
        props.dedup();
        props
    }

    pub fn view(&self, feed_limit: usize) -> DashboardView {
        let visible = self.visible_rows();

        DashboardView {
            range: self.range.clone(),
            property: self.property.clone(),
            search: self.search.clone(),
            status: self.status.clone(),
            kpis: aggregate(&visible),
            charts: build_charts(&visible, &self.range),
            feed: build_feed(&visible, feed_limit),
            visible: visible.len(),
            loaded: self.rows.len(),
            properties: self.known_properties(),
        }
    }
}
