//! Numeric helpers shared by the analytics.

pub mod ols;
pub mod stats;

pub use ols::{fit_index_line, LinearFit};
pub use stats::MeanAccumulator;
