//! Measurement records and the ingestion rules applied to them.

use crate::error::{AnalyticsError, RecordField, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single dated air-quality observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementRecord {
    date: NaiveDate,
    aqi: f64,
    pm25: f64,
}

impl MeasurementRecord {
    /// Create a record. Finiteness of `aqi` and `pm25` is checked when the
    /// record enters a [`RecordSet`](crate::core::RecordSet).
    pub fn new(date: NaiveDate, aqi: f64, pm25: f64) -> Self {
        Self { date, aqi, pm25 }
    }

    /// Calendar date of the observation.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Air Quality Index reading.
    pub fn aqi(&self) -> f64 {
        self.aqi
    }

    /// PM2.5 concentration reading.
    pub fn pm25(&self) -> f64 {
        self.pm25
    }

    /// Calendar year of the observation.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month of year, January = 0.
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    /// Check the numeric invariants, reporting `index` on failure.
    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        check_finite(index, RecordField::Aqi, self.aqi)?;
        check_finite(index, RecordField::Pm25, self.pm25)?;
        Ok(())
    }
}

/// A single field of a raw record, as decoded from JSON.
///
/// Any JSON value is accepted here so that a value of the wrong type is
/// reported against its record and field instead of failing the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawField {
    /// Short description of the JSON type, for error messages.
    fn kind(&self) -> &'static str {
        match self {
            RawField::Number(_) => "a number",
            RawField::Text(_) => "a string",
            RawField::Other(serde_json::Value::Bool(_)) => "a boolean",
            RawField::Other(serde_json::Value::Array(_)) => "an array",
            RawField::Other(serde_json::Value::Object(_)) => "an object",
            RawField::Other(_) => "an unsupported value",
        }
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        RawField::Text(value)
    }
}

/// A record as delivered by the data service, before validation.
///
/// Every field is optional and untyped so that a missing or mistyped value
/// surfaces as a [`AnalyticsError::MalformedRecord`] naming the record and
/// field, rather than as an opaque decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: Option<RawField>,
    #[serde(default)]
    pub aqi: Option<RawField>,
    #[serde(default)]
    pub pm25: Option<RawField>,
}

impl RawRecord {
    /// Create a raw record from a date string and two readings.
    pub fn new(date: impl Into<String>, aqi: f64, pm25: f64) -> Self {
        Self {
            date: Some(RawField::Text(date.into())),
            aqi: Some(RawField::Number(aqi)),
            pm25: Some(RawField::Number(pm25)),
        }
    }

    /// Validate and convert into a [`MeasurementRecord`].
    ///
    /// Fields are checked in order `date`, `aqi`, `pm25`; the first failure
    /// is returned with `index` attached.
    pub fn into_record(self, index: usize, config: &IngestConfig) -> Result<MeasurementRecord> {
        let date_str = match self.date {
            Some(RawField::Text(text)) => text,
            Some(other) => {
                return Err(AnalyticsError::malformed(
                    index,
                    RecordField::Date,
                    format!("is {}, expected a date string", other.kind()),
                ))
            }
            None => return Err(AnalyticsError::malformed(index, RecordField::Date, "is missing")),
        };
        let date = config.parse_date(&date_str).ok_or_else(|| {
            AnalyticsError::malformed(
                index,
                RecordField::Date,
                format!("is not a calendar date: {:?}", date_str),
            )
        })?;
        let aqi = reading(index, RecordField::Aqi, self.aqi)?;
        let pm25 = reading(index, RecordField::Pm25, self.pm25)?;

        let record = MeasurementRecord::new(date, aqi, pm25);
        record.validate(index)?;
        Ok(record)
    }
}

/// Extract a numeric reading, rejecting missing and non-numeric values.
fn reading(index: usize, field: RecordField, raw: Option<RawField>) -> Result<f64> {
    match raw {
        Some(RawField::Number(value)) => Ok(value),
        Some(other) => Err(AnalyticsError::malformed(
            index,
            field,
            format!("is {}, expected a number", other.kind()),
        )),
        None => Err(AnalyticsError::malformed(index, field, "is missing")),
    }
}

fn check_finite(index: usize, field: RecordField, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticsError::malformed(
            index,
            field,
            format!("is not a finite number: {}", value),
        ))
    }
}

/// Datetime layouts tried when `accept_datetimes` is set.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Configuration for turning raw records into validated ones.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// chrono date formats, tried in order.
    pub date_formats: Vec<String>,
    /// Also accept RFC 3339 and ISO-like datetimes, keeping the date as written.
    pub accept_datetimes: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            date_formats: vec!["%Y-%m-%d".to_string(), "%Y/%m/%d".to_string()],
            accept_datetimes: true,
        }
    }
}

impl IngestConfig {
    /// Create a config with the default date formats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted date formats.
    pub fn with_date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Append one accepted date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.push(format.into());
        self
    }

    /// Toggle acceptance of RFC 3339 and ISO-like datetimes.
    pub fn with_datetimes(mut self, accept: bool) -> Self {
        self.accept_datetimes = accept;
        self
    }

    /// Reject configurations that could never accept a date.
    pub fn validate(&self) -> Result<()> {
        if self.date_formats.is_empty() && !self.accept_datetimes {
            return Err(AnalyticsError::InvalidParameter(
                "no date formats configured and datetimes disabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a date string according to this configuration.
    pub fn parse_date(&self, input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        for format in &self.date_formats {
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                return Some(date);
            }
        }

        if self.accept_datetimes {
            if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
                return Some(dt.date_naive());
            }
            for format in DATETIME_FORMATS {
                if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
                    return Some(dt.date());
                }
            }
        }

        None
    }
}
