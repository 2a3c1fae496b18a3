pub mod aggregate;
pub mod charts;
pub mod classify;
pub mod dedupe;
pub mod feed;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod pipeline;

pub use pipeline::{AppState, DashboardView, LoadOutcome, LoadStatus, LoadToken};
