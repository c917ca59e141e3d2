//! Composite Simpson's 1/3 rule over evenly spaced samples.

use crate::error::NumericError;

/// Integrates evenly spaced `values` with spacing `h` using the composite
/// Simpson's 1/3 rule.
///
/// The rule needs an even number of sub-intervals, i.e. an odd number of
/// points. An even count is rejected instead of silently falling back to a
/// trapezoid on the last interval.
///
/// # Errors
///
/// - [`NumericError::EmptyData`] if `values` is empty.
/// - [`NumericError::InsufficientData`] if fewer than 3 points are given.
/// - [`NumericError::EvenPointCount`] if the point count is even.
/// - [`NumericError::InvalidStep`] if `h` is not finite and positive.
/// - [`NumericError::NonFiniteData`] if any value is NaN or infinite.
pub fn simpson_integrate(values: &[f64], h: f64) -> Result<f64, NumericError> {
    let n = values.len();
    if n == 0 {
        return Err(NumericError::EmptyData);
    }
    if n < 3 {
        return Err(NumericError::InsufficientData { n, min: 3 });
    }
    if n % 2 == 0 {
        return Err(NumericError::EvenPointCount { n });
    }
    if !h.is_finite() || h <= 0.0 {
        return Err(NumericError::InvalidStep { step: h });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(NumericError::NonFiniteData);
    }

    let interior: f64 = values[1..n - 1]
        .iter()
        .enumerate()
        .map(|(k, &v)| if k % 2 == 0 { 4.0 * v } else { 2.0 * v })
        .sum();
    Ok(h / 3.0 * (values[0] + interior + values[n - 1]))
}
