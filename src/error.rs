//! Error types for the aqi-analytics library.

use std::fmt;
use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Field of a measurement record that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Date,
    Aqi,
    Pm25,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::Date => "date",
            RecordField::Aqi => "aqi",
            RecordField::Pm25 => "pm25",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while ingesting measurement records.
///
/// Aggregation itself never fails: empty and single-point inputs are defined
/// cases that produce zero-valued results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A record was rejected at the ingestion boundary.
    #[error("malformed record at index {index}: field `{field}` {reason}")]
    MalformedRecord {
        index: usize,
        field: RecordField,
        reason: String,
    },

    /// The payload could not be decoded as an array of records.
    #[error("invalid json payload: {0}")]
    InvalidJson(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl AnalyticsError {
    pub(crate) fn malformed(index: usize, field: RecordField, reason: impl Into<String>) -> Self {
        AnalyticsError::MalformedRecord {
            index,
            field,
            reason: reason.into(),
        }
    }

    /// Index of the offending record, if this error refers to one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            AnalyticsError::MalformedRecord { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::InvalidJson(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = AnalyticsError::malformed(
            3,
            RecordField::Date,
            "is not a calendar date: \"2021-13-01\"",
        );
        assert_eq!(
            err.to_string(),
            "malformed record at index 3: field `date` is not a calendar date: \"2021-13-01\""
        );

        let err = AnalyticsError::malformed(0, RecordField::Pm25, "is missing");
        assert_eq!(err.to_string(), "malformed record at index 0: field `pm25` is missing");

        let err = AnalyticsError::InvalidParameter("no date formats configured".to_string());
        assert_eq!(
            err.to_string(),
            "invalid parameter: no date formats configured"
        );
    }

    #[test]
    fn record_index_is_exposed_for_malformed_records() {
        let err = AnalyticsError::malformed(7, RecordField::Aqi, "is not finite");
        assert_eq!(err.record_index(), Some(7));
        assert_eq!(AnalyticsError::InvalidJson("eof".into()).record_index(), None);
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = AnalyticsError::malformed(1, RecordField::Aqi, "is missing");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
