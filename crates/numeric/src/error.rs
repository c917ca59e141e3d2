//! Error types for the netflux-numeric crate.

/// Error type for all fallible operations in the netflux-numeric crate.
///
/// Every variant describes invalid input handed to a kernel. Numerical
/// degeneracies that have a defined answer (boundary derivatives, the
/// integrator's bandwidth floor) never produce an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// Returned when the input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when there are fewer points than the kernel needs.
    #[error("insufficient data: got {n} points, need at least {min}")]
    InsufficientData {
        /// Number of points provided.
        n: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// Returned when Simpson's rule is given an even number of points.
    #[error("simpson's rule needs an odd number of points, got {n}")]
    EvenPointCount {
        /// Number of points provided.
        n: usize,
    },

    /// Returned when a step size is zero, negative, or non-finite.
    #[error("step size must be finite and positive, got {step}")]
    InvalidStep {
        /// The rejected step size.
        step: f64,
    },

    /// Returned when paired slices differ in length.
    #[error("length mismatch: {times} times but {values} values")]
    LengthMismatch {
        /// Length of the time slice.
        times: usize,
        /// Length of the value slice.
        values: usize,
    },

    /// Returned when a time or value is NaN or infinite.
    #[error("input data contains non-finite values")]
    NonFiniteData,
}

impl NumericError {
    /// Returns `true` for every variant; kernels fail only on bad input.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}
