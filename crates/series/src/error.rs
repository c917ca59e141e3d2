//! Error types for the netflux-series crate.

use netflux_numeric::NumericError;

/// Error type for all fallible operations in the netflux-series crate.
///
/// Degenerate statistics (mean of an empty series, volatility of a flat
/// series) are not errors; they return 0.0.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when an operation needs at least one sample.
    #[error("sample series is empty")]
    EmptyData,

    /// Returned when there are fewer samples than an operation needs.
    #[error("insufficient data: got {n} samples, need at least {min}")]
    InsufficientData {
        /// Number of samples available.
        n: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when a time or bandwidth value is NaN or infinite.
    #[error("sample {index} contains a non-finite value")]
    NonFiniteData {
        /// Position of the offending sample.
        index: usize,
    },

    /// Returned when a bandwidth value is negative.
    #[error("sample {index} has negative bandwidth {value}")]
    NegativeBandwidth {
        /// Position of the offending sample.
        index: usize,
        /// The rejected bandwidth.
        value: f64,
    },

    /// Returned when sample times are not strictly increasing.
    #[error("sample {index} at time {time} does not follow time {prev}")]
    NonIncreasingTime {
        /// Position of the offending sample.
        index: usize,
        /// Time of the preceding sample.
        prev: f64,
        /// Time of the offending sample.
        time: f64,
    },

    /// Returned when two samples share a time after resequencing.
    #[error("duplicate sample time {time}")]
    DuplicateTime {
        /// The repeated time.
        time: f64,
    },

    /// Returned when sample spacing does not match the analyzer step.
    #[error("sample {index} is spaced {got} from its predecessor, expected {expected}")]
    NonUniformSpacing {
        /// Position of the offending sample.
        index: usize,
        /// Configured step.
        expected: f64,
        /// Observed spacing.
        got: f64,
    },

    /// Returned when an index is past the end of the series.
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Series length.
        len: usize,
    },

    /// Returned when the analyzer step is zero, negative, or non-finite.
    #[error("step must be finite and positive, got {step}")]
    InvalidStep {
        /// The rejected step.
        step: f64,
    },

    /// Returned when a classification threshold is negative or non-finite.
    #[error("invalid threshold: {reason}")]
    InvalidThreshold {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps an error from a numeric kernel.
    #[error("numeric kernel failed: {0}")]
    Numeric(#[from] NumericError),
}

impl SeriesError {
    /// Returns `true` when the error stems from malformed caller input.
    ///
    /// Every current variant does; the method exists so callers can branch on
    /// the category without matching each variant.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Numeric(e) => e.is_invalid_input(),
            _ => true,
        }
    }
}
