pub mod event_class;
pub mod kpi;
pub mod range;
pub mod record;
pub mod row;

pub use event_class::EventClass;
pub use kpi::Kpis;
pub use range::{Range, RangeMode};
pub use record::{Record, SourceTable};
pub use row::{NormalizedRow, RowKind};
