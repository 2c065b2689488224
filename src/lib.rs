//! # aqi-analytics
//!
//! Analytics core for air-quality measurements.
//!
//! Takes dated AQI / PM2.5 readings and derives summary statistics, a yearly
//! mean-AQI series with a linear one-step forecast, and a twelve-month
//! seasonal profile.
//!
//! ```
//! use aqi_analytics::prelude::*;
//!
//! let records = RecordSet::from_json(
//!     r#"[{"date": "2019-01-01", "aqi": 50, "pm25": 10},
//!         {"date": "2020-01-01", "aqi": 60, "pm25": 12},
//!         {"date": "2021-01-01", "aqi": 70, "pm25": 15}]"#,
//! )
//! .unwrap();
//!
//! let report = analyze(&records);
//! assert_eq!(report.yearly.keys(), vec![2019, 2020, 2021]);
//! assert!((report.trend.predicted_next - 80.0).abs() < 1e-9);
//! ```

pub mod analytics;
pub mod core;
pub mod error;
pub mod utils;

pub use error::{AnalyticsError, RecordField, Result};

pub mod prelude {
    pub use crate::analytics::{
        aggregate_by_season, aggregate_by_year, analyze, estimate_trend, summarize,
        DashboardReport, Summary, TrendResult,
    };
    pub use crate::core::{
        AggregateSeries, IngestConfig, MeasurementRecord, PeriodGrouping, RawRecord, RecordSet,
    };
    pub use crate::error::{AnalyticsError, Result};
}
