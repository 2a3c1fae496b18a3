use serde::Serialize;

/// Summary metrics shown as tiles. `None` renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub total_calls: usize,
    pub total_bookings: usize,
    pub conversion_rate: Option<f64>,
    pub avg_call_duration: Option<f64>,
    pub total_revenue: f64,
}
