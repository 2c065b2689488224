//! Grouping records by calendar period and reducing each group to a mean AQI.

use crate::core::{AggregateSeries, PeriodGrouping, PeriodKey, RecordSet};
use crate::utils::MeanAccumulator;
use std::collections::BTreeMap;

const MONTHS_PER_YEAR: usize = 12;

/// Group by `grouping` and average AQI per group.
///
/// Yearly output holds only the observed years, ascending. Month-of-year
/// output always has twelve entries in calendar order; months without
/// observations carry a mean of `0.0`.
pub fn aggregate_by(records: &RecordSet, grouping: PeriodGrouping) -> AggregateSeries {
    match grouping {
        PeriodGrouping::Year => aggregate_by_year(records),
        PeriodGrouping::MonthOfYear => aggregate_by_season(records),
    }
}

/// Mean AQI per calendar year, ascending by year, without gap filling.
pub fn aggregate_by_year(records: &RecordSet) -> AggregateSeries {
    let mut buckets: BTreeMap<PeriodKey, MeanAccumulator> = BTreeMap::new();
    for record in records {
        buckets.entry(record.year()).or_default().push(record.aqi());
    }

    AggregateSeries::from_pairs(
        PeriodGrouping::Year,
        buckets
            .into_iter()
            .filter_map(|(year, acc)| acc.mean().map(|m| (year, m))),
    )
}

/// Mean AQI per month of year, always twelve entries from January.
pub fn aggregate_by_season(records: &RecordSet) -> AggregateSeries {
    let mut buckets = [MeanAccumulator::new(); MONTHS_PER_YEAR];
    for record in records {
        buckets[record.month0() as usize].push(record.aqi());
    }

    AggregateSeries::from_pairs(
        PeriodGrouping::MonthOfYear,
        buckets
            .iter()
            .enumerate()
            .map(|(month, acc)| (month as PeriodKey, acc.mean().unwrap_or(0.0))),
    )
}
