//! Air-quality analytics: summary, period aggregation and trend estimation.
//!
//! Every function here is a pure function of its input. Degenerate inputs
//! (no records, a single year) produce zero-valued results instead of errors.

mod period;
mod report;
mod summary;
mod trend;

pub use period::{aggregate_by, aggregate_by_season, aggregate_by_year};
pub use report::{analyze, DashboardReport};
pub use summary::{summarize, Summary};
pub use trend::{estimate_trend, TrendResult};
