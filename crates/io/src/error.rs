//! Error types for naiad-io.

use std::path::PathBuf;

use naiad_fdc::FdcError;
use naiad_series::SeriesError;

/// Error type for all fallible operations in the naiad-io crate.
///
/// Covers filesystem and CSV failures, malformed headers and cells, and
/// data-model errors surfaced while assembling the parsed rows.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a file's header row does not match the expected
    /// layout.
    #[error("bad header: {reason}")]
    Header {
        /// Description of the mismatch.
        reason: String,
    },

    /// Returned when a timestamp cell cannot be parsed as RFC 3339.
    #[error("invalid timestamp on line {line}: '{value}'")]
    InvalidTimestamp {
        /// 1-based data row number.
        line: usize,
        /// The offending cell.
        value: String,
    },

    /// Returned when a numeric cell cannot be parsed.
    #[error("invalid number on line {line}: '{value}'")]
    InvalidNumber {
        /// 1-based data row number.
        line: usize,
        /// The offending cell.
        value: String,
    },

    /// Wraps an error from the naiad-series crate.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Wraps an error from the naiad-fdc crate.
    #[error(transparent)]
    Fdc(#[from] FdcError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: unequal lengths");
    }

    #[test]
    fn display_header() {
        let err = IoError::Header {
            reason: "expected first column 'datetime', got 'time'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bad header: expected first column 'datetime', got 'time'"
        );
    }

    #[test]
    fn display_invalid_timestamp() {
        let err = IoError::InvalidTimestamp {
            line: 3,
            value: "yesterday".to_string(),
        };
        assert_eq!(err.to_string(), "invalid timestamp on line 3: 'yesterday'");
    }

    #[test]
    fn display_invalid_number() {
        let err = IoError::InvalidNumber {
            line: 7,
            value: "12,5".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number on line 7: '12,5'");
    }

    #[test]
    fn from_series_error() {
        let inner = SeriesError::NoColumns;
        let err: IoError = inner.into();
        assert!(matches!(err, IoError::Series(_)));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
