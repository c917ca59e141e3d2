//! Error types for netflux-io.

use std::path::PathBuf;

use netflux_predict::PredictError;
use netflux_series::SeriesError;

/// Error type for all fallible operations in the netflux-io crate.
///
/// Covers missing files, CSV parse and write failures, row-level validation
/// problems, and rejections from the series model the rows are loaded into.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader or writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a file holds a header but no data rows.
    #[error("no data rows in {}", path.display())]
    NoRecords {
        /// Path to the file that was read.
        path: PathBuf,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when the prediction column is shorter than the series.
    #[error("length mismatch: {samples} samples but {predictions} predictions")]
    LengthMismatch {
        /// Number of samples.
        samples: usize,
        /// Number of predicted values.
        predictions: usize,
    },

    /// Wraps an error from the series model.
    #[error("series error: {0}")]
    Series(#[from] SeriesError),

    /// Wraps an error from the predictor.
    #[error("prediction error: {0}")]
    Predict(#[from] PredictError),
}

impl IoError {
    /// Returns `true` when the error stems from malformed input rather than
    /// the filesystem.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::FileNotFound { .. } | Self::Io { .. } => false,
            Self::Series(e) => e.is_invalid_input(),
            Self::Predict(e) => e.is_invalid_input(),
            _ => true,
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
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
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: bad quote");
    }

    #[test]
    fn display_no_records() {
        let err = IoError::NoRecords {
            path: PathBuf::from("data/empty.csv"),
        };
        assert_eq!(err.to_string(), "no data rows in data/empty.csv");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "row 3: bandwidth is NaN; row 7: hour is inf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): row 3: bandwidth is NaN; row 7: hour is inf"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = IoError::LengthMismatch {
            samples: 24,
            predictions: 12,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: 24 samples but 12 predictions"
        );
    }

    #[test]
    fn from_series_error() {
        let err: IoError = SeriesError::DuplicateTime { time: 3.0 }.into();
        assert_eq!(err.to_string(), "series error: duplicate sample time 3");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: IoError = io.into();
        assert!(matches!(err, IoError::Io { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
