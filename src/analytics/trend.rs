//! Linear trend over the yearly series with a one-step forecast.

use crate::core::AggregateSeries;
use crate::utils::fit_index_line;
use serde::Serialize;

/// Fitted slope and the one-period-ahead extrapolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrendResult {
    /// Change in mean AQI per period, `0.0` with fewer than two points.
    pub slope: f64,
    /// Last observed mean plus `slope`, `0.0` for an empty series.
    pub predicted_next: f64,
}

impl TrendResult {
    /// Slope rounded to two decimals.
    pub fn slope_display(&self) -> String {
        format!("{:.2}", self.slope)
    }

    /// Forecast rounded to one decimal.
    pub fn predicted_next_display(&self) -> String {
        format!("{:.1}", self.predicted_next)
    }
}

/// Fit an OLS line over the series and extrapolate one period.
///
/// The regressor is the index position `0..n-1`, not the key itself, so
/// series with missing years are treated as equally spaced.
pub fn estimate_trend(series: &AggregateSeries) -> TrendResult {
    let values = series.values();

    let slope = fit_index_line(&values).map(|fit| fit.slope).unwrap_or(0.0);
    let predicted_next = values.last().map(|last| last + slope).unwrap_or(0.0);

    log::debug!(
        "trend over {} periods: slope={:.4}, next={:.4}",
        values.len(),
        slope,
        predicted_next
    );

    TrendResult {
        slope,
        predicted_next,
    }
}
