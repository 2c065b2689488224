//! Statistical utility functions.
//!
//! Means are computed incrementally so that large finite inputs never
//! overflow an intermediate sum.

/// Calculate the mean of a slice.
///
/// # Arguments
/// * `values` - Input values
///
/// # Returns
/// The arithmetic mean, or NaN for an empty slice.
///
/// # Example
/// ```
/// use aqi_analytics::utils::stats::mean;
///
/// assert_eq!(mean(&[1.0e308, 1.0e308]), 1.0e308);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(values: &[f64]) -> f64 {
    let mut acc = MeanAccumulator::new();
    for &value in values {
        acc.push(value);
    }
    acc.mean().unwrap_or(f64::NAN)
}

/// Returns the maximum value, or negative infinity for an empty slice.
pub fn maximum(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Returns the minimum value, or positive infinity for an empty slice.
pub fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Running mean for values arriving one at a time.
///
/// Keeps the current mean rather than a sum, so the result stays within
/// the range of the pushed values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    mean: f64,
    count: usize,
}

impl MeanAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the running mean.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let k = self.count as f64;
        self.mean += value / k - self.mean / k;
    }

    /// Number of values pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of pushed values, `None` if nothing was pushed.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }
}
