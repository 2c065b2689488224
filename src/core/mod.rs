//! Core data structures: measurement records and aggregate series.

mod record;
mod record_set;
mod series;

pub use record::{IngestConfig, MeasurementRecord, RawField, RawRecord};
pub use record_set::{DailySeries, RecordSet};
pub use series::{AggregatePoint, AggregateSeries, PeriodGrouping, PeriodKey, MONTH_LABELS};
