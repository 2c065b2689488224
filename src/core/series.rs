//! Period-keyed aggregate series.

use serde::Serialize;

/// Abbreviated month names in calendar order, indexed by month-of-year key.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Grouping key for aggregation: a calendar year or a month-of-year index.
pub type PeriodKey = i32;

/// How records are bucketed into periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodGrouping {
    /// Calendar year, e.g. `2021`.
    Year,
    /// Month of year, January = 0 through December = 11.
    MonthOfYear,
}

impl PeriodGrouping {
    /// Human-readable label for a key of this grouping.
    pub fn label(&self, key: PeriodKey) -> String {
        match self {
            PeriodGrouping::Year => key.to_string(),
            PeriodGrouping::MonthOfYear => usize::try_from(key)
                .ok()
                .and_then(|i| MONTH_LABELS.get(i))
                .map(|s| s.to_string())
                .unwrap_or_else(|| key.to_string()),
        }
    }
}

/// One bucket of an aggregate series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregatePoint {
    /// Year, or month-of-year index.
    pub key: PeriodKey,
    /// Mean AQI of the records in this period.
    pub mean_aqi: f64,
}

/// Mean AQI per period, ordered by key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSeries {
    grouping: PeriodGrouping,
    points: Vec<AggregatePoint>,
}

impl AggregateSeries {
    /// Create a series from points already in output order.
    pub fn new(grouping: PeriodGrouping, points: Vec<AggregatePoint>) -> Self {
        Self { grouping, points }
    }

    /// Build a series from `(key, mean)` pairs.
    pub fn from_pairs<I>(grouping: PeriodGrouping, pairs: I) -> Self
    where
        I: IntoIterator<Item = (PeriodKey, f64)>,
    {
        let points = pairs
            .into_iter()
            .map(|(key, mean_aqi)| AggregatePoint { key, mean_aqi })
            .collect();
        Self { grouping, points }
    }

    /// Grouping the keys belong to.
    pub fn grouping(&self) -> PeriodGrouping {
        self.grouping
    }

    /// Points in output order.
    pub fn points(&self) -> &[AggregatePoint] {
        &self.points
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no period was observed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Period keys in series order.
    pub fn keys(&self) -> Vec<PeriodKey> {
        self.points.iter().map(|p| p.key).collect()
    }

    /// Mean AQI values in series order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.mean_aqi).collect()
    }

    /// Chart labels: years as written, months as `Jan`..`Dec`.
    pub fn labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| self.grouping.label(p.key))
            .collect()
    }

    /// Last observed point.
    pub fn last(&self) -> Option<&AggregatePoint> {
        self.points.last()
    }

    /// Mean for a given key, if present.
    pub fn get(&self, key: PeriodKey) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.mean_aqi)
    }
}
