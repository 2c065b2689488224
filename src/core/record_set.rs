//! RecordSet: the validated input collection.

use super::record::{IngestConfig, MeasurementRecord, RawRecord};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// An ordered collection of validated measurement records.
///
/// Construction validates every record; a `RecordSet` never holds a
/// record with a non-finite reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<MeasurementRecord>,
}

impl RecordSet {
    /// Build a record set, failing on the first record with a non-finite value.
    pub fn new(records: Vec<MeasurementRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            record.validate(index)?;
        }
        Ok(Self { records })
    }

    /// An empty record set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate raw records with the default [`IngestConfig`].
    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Self> {
        Self::from_raw_with(raw, &IngestConfig::default())
    }

    /// Validate raw records, failing closed on the first malformed one.
    pub fn from_raw_with(raw: Vec<RawRecord>, config: &IngestConfig) -> Result<Self> {
        config.validate()?;

        let total = raw.len();
        let mut records = Vec::with_capacity(total);
        for (index, item) in raw.into_iter().enumerate() {
            match item.into_record(index, config) {
                Ok(record) => records.push(record),
                Err(err) => {
                    log::warn!("rejecting record set of {} records: {}", total, err);
                    return Err(err);
                }
            }
        }

        log::debug!("ingested {} measurement records", records.len());
        Ok(Self { records })
    }

    /// Parse the JSON array returned by the air data service.
    pub fn from_json(payload: &str) -> Result<Self> {
        Self::from_json_with(payload, &IngestConfig::default())
    }

    /// Parse a JSON array of `{ date, aqi, pm25 }` objects with a custom config.
    pub fn from_json_with(payload: &str, config: &IngestConfig) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(payload)?;
        Self::from_raw_with(raw, config)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in input order.
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Iterate records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, MeasurementRecord> {
        self.records.iter()
    }

    /// AQI readings in input order.
    pub fn aqi_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.aqi()).collect()
    }

    /// PM2.5 readings in input order.
    pub fn pm25_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.pm25()).collect()
    }

    /// Per-record series in input order, for the daily chart.
    pub fn daily_series(&self) -> DailySeries {
        DailySeries {
            labels: self.records.iter().map(|r| r.date()).collect(),
            aqi: self.aqi_values(),
            pm25: self.pm25_values(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a MeasurementRecord;
    type IntoIter = std::slice::Iter<'a, MeasurementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Raw per-record readings, aligned by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    /// Record dates, used as chart labels.
    pub labels: Vec<NaiveDate>,
    pub aqi: Vec<f64>,
    pub pm25: Vec<f64>,
}

impl DailySeries {
    /// Number of daily points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if there are no daily points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
