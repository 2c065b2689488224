//! Closed-form ordinary least squares over equally spaced points.

use super::stats;

/// Slope and intercept of a fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line through `(i, values[i])` for `i = 0..n-1`.
///
/// The x values are index positions, so the series is treated as equally
/// spaced. The slope equals `(n*Sxy - Sx*Sy) / (n*Sxx - Sx^2)`; it is
/// evaluated on mean-centred values with per-point weights so that large
/// finite inputs do not overflow the intermediate sums.
///
/// # Arguments
/// * `values` - Observations in index order
///
/// # Returns
/// `None` for fewer than two points or a zero denominator.
///
/// # Example
/// ```
/// use aqi_analytics::utils::fit_index_line;
///
/// let fit = fit_index_line(&[50.0, 60.0, 70.0]).unwrap();
/// assert!((fit.slope - 10.0).abs() < 1e-10);
/// assert!((fit.predict(3.0) - 80.0).abs() < 1e-10);
/// ```
pub fn fit_index_line(values: &[f64]) -> Option<LinearFit> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = stats::mean(values);

    let ss_xx: f64 = (0..n).map(|i| (i as f64 - mean_x).powi(2)).sum();
    if ss_xx == 0.0 {
        return None;
    }

    let slope: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (i as f64 - mean_x) / ss_xx * (y - mean_y))
        .sum();
    let intercept = mean_y - slope * mean_x;

    Some(LinearFit { slope, intercept })
}
