//! Error types for the naiad-series crate.

use chrono::{DateTime, Utc};

/// Error type for all fallible operations in the naiad-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when timestamps and values differ in length.
    #[error("length mismatch: {timestamps_len} timestamps but {values_len} values")]
    LengthMismatch {
        /// Number of timestamps supplied.
        timestamps_len: usize,
        /// Number of values supplied.
        values_len: usize,
    },

    /// Returned when the timestamp index is not strictly increasing.
    #[error("timestamps not strictly increasing at index {index}")]
    UnsortedTimestamps {
        /// Index of the first out-of-order entry.
        index: usize,
    },

    /// Returned when the same timestamp appears more than once.
    #[error("duplicate timestamp: {timestamp}")]
    DuplicateTimestamp {
        /// The repeated timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Returned when a table column has a different length than the index.
    #[error("column '{column}' length mismatch: expected {expected}, got {got}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Expected length (length of the timestamp index).
        expected: usize,
        /// Actual column length.
        got: usize,
    },

    /// Returned when a table is constructed with no columns.
    #[error("table must have at least one column")]
    NoColumns,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn error_length_mismatch() {
        let e = SeriesError::LengthMismatch {
            timestamps_len: 3,
            values_len: 2,
        };
        assert_eq!(e.to_string(), "length mismatch: 3 timestamps but 2 values");
    }

    #[test]
    fn error_unsorted() {
        let e = SeriesError::UnsortedTimestamps { index: 5 };
        assert_eq!(e.to_string(), "timestamps not strictly increasing at index 5");
    }

    #[test]
    fn error_duplicate_timestamp() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let e = SeriesError::DuplicateTimestamp { timestamp: ts };
        assert_eq!(e.to_string(), "duplicate timestamp: 2020-01-01 00:00:00 UTC");
    }

    #[test]
    fn error_column_length_mismatch() {
        let e = SeriesError::ColumnLengthMismatch {
            column: "ensemble_01".to_string(),
            expected: 10,
            got: 9,
        };
        assert_eq!(
            e.to_string(),
            "column 'ensemble_01' length mismatch: expected 10, got 9"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SeriesError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
