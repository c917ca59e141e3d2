//! Error types for the netflux-predict crate.

use netflux_numeric::NumericError;
use netflux_series::SeriesError;

/// Error type for all fallible operations in the netflux-predict crate.
///
/// A predicted value falling below the floor is never an error; the
/// integrator clamps it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// Returned when the series to seed from has no samples.
    #[error("cannot seed a prediction from an empty series")]
    EmptyData,

    /// Returned when the prediction horizon is zero.
    #[error("invalid horizon: {horizon} (must be at least 1)")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: usize,
    },

    /// Returned when the integration step or output interval is not finite
    /// and positive.
    #[error("invalid {name}: {value} (must be finite and > 0)")]
    InvalidStep {
        /// Which setting was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a model parameter is non-finite or out of range.
    #[error("invalid model parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when an explicit seed time is not finite.
    #[error("seed time must be finite, got {time}")]
    InvalidSeedTime {
        /// The rejected time.
        time: f64,
    },

    /// Wraps an error from the series analyzer.
    #[error("series analysis failed: {0}")]
    Series(#[from] SeriesError),

    /// Wraps an error from a numeric kernel.
    #[error("numeric kernel failed: {0}")]
    Numeric(#[from] NumericError),
}

impl PredictError {
    /// Returns `true` when the error stems from malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Series(e) => e.is_invalid_input(),
            Self::Numeric(e) => e.is_invalid_input(),
            _ => true,
        }
    }
}
