//! Lagrange polynomial interpolation through every sample.

use crate::error::NumericError;

/// Evaluates the Lagrange polynomial through all `(times[j], values[j])`
/// pairs at `target`.
///
/// Cost is O(n²) per call. The polynomial has degree n-1, so evaluation far
/// outside `[min(times), max(times)]` grows large errors quickly.
///
/// Distinct times are the caller's responsibility: duplicates make a basis
/// denominator zero and the result non-finite.
///
/// # Errors
///
/// Returns [`NumericError::EmptyData`] if there are no points, or
/// [`NumericError::LengthMismatch`] if the slices differ in length.
pub fn lagrange_interpolate(times: &[f64], values: &[f64], target: f64) -> Result<f64, NumericError> {
    if times.len() != values.len() {
        return Err(NumericError::LengthMismatch {
            times: times.len(),
            values: values.len(),
        });
    }
    if times.is_empty() {
        return Err(NumericError::EmptyData);
    }

    let mut result = 0.0;
    for (j, (&tj, &vj)) in times.iter().zip(values).enumerate() {
        let mut basis = 1.0;
        for (m, &tm) in times.iter().enumerate() {
            if m != j {
                basis *= (target - tm) / (tj - tm);
            }
        }
        result += vj * basis;
    }
    Ok(result)
}
