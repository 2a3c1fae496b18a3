use crate::models::{Kpis, NormalizedRow};

pub fn aggregate(rows: &[NormalizedRow]) -> Kpis {
    let mut kpis = Kpis::default();
    let mut duration_sum = 0.0;
    let mut duration_count = 0usize;

    for row in rows {
        if row.kind().is_call() {
            kpis.total_calls += 1;
            if let Some(d) = row.duration.filter(|d| d.is_finite()) {
                duration_sum += d;
                duration_count += 1;
            }
        } else {
            kpis.total_bookings += 1;
            if let Some(t) = row.total_due.filter(|t| t.is_finite()) {
                kpis.total_revenue += t;
            }
        }
    }

    kpis.conversion_rate = if kpis.total_calls == 0 {
        None
    } else {
        Some(kpis.total_bookings as f64 / kpis.total_calls as f64)
    };

    kpis.avg_call_duration = if duration_count == 0 {
        None
    } else {
        Some(duration_sum / duration_count as f64)
    };

    kpis
}
