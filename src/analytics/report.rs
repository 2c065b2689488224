//! One-shot pipeline producing every dashboard output.

use super::period::{aggregate_by_season, aggregate_by_year};
use super::summary::{summarize, Summary};
use super::trend::{estimate_trend, TrendResult};
use crate::core::{AggregateSeries, DailySeries, RecordSet};
use serde::Serialize;

/// All derived outputs for a record set, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub summary: Summary,
    pub daily: DailySeries,
    pub yearly: AggregateSeries,
    pub seasonal: AggregateSeries,
    pub trend: TrendResult,
}

impl DashboardReport {
    /// Serialize the report as JSON for the presentation layer.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Run the summarizer, both aggregations and the trend estimator.
pub fn analyze(records: &RecordSet) -> DashboardReport {
    let summary = summarize(records);
    let yearly = aggregate_by_year(records);
    let seasonal = aggregate_by_season(records);
    let trend = estimate_trend(&yearly);

    log::debug!(
        "analyzed {} records into {} yearly periods",
        summary.record_count,
        yearly.len()
    );

    DashboardReport {
        summary,
        daily: records.daily_series(),
        yearly,
        seasonal,
        trend,
    }
}
