//! Whole-set scalar aggregates.

use crate::core::RecordSet;
use crate::utils::stats;
use serde::Serialize;

/// Scalar aggregates over a record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Arithmetic mean of AQI, `0.0` for an empty set.
    pub mean_aqi: f64,
    /// Maximum PM2.5, `0.0` for an empty set.
    pub max_pm25: f64,
    /// Number of records summarized.
    pub record_count: usize,
}

impl Summary {
    /// Mean AQI rounded to one decimal, as shown on the dashboard card.
    pub fn mean_aqi_display(&self) -> String {
        format!("{:.1}", self.mean_aqi)
    }
}

/// Compute mean AQI and maximum PM2.5.
///
/// An empty record set yields zeros rather than an error so downstream
/// display stays defined.
pub fn summarize(records: &RecordSet) -> Summary {
    if records.is_empty() {
        return Summary {
            mean_aqi: 0.0,
            max_pm25: 0.0,
            record_count: 0,
        };
    }

    Summary {
        mean_aqi: stats::mean(&records.aqi_values()),
        max_pm25: stats::maximum(&records.pm25_values()),
        record_count: records.len(),
    }
}
