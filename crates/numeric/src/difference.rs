//! Finite-difference derivative estimates on a uniform grid.
//!
//! The pointwise kernels are total: an index without the neighbours its
//! stencil needs (including any index past the end) yields exactly 0.0.

/// Forward difference `(v[i+1] - v[i]) / h`.
///
/// Returns 0.0 when `i` has no forward neighbour.
pub fn forward_difference(values: &[f64], i: usize, h: f64) -> f64 {
    if i + 1 >= values.len() {
        return 0.0;
    }
    (values[i + 1] - values[i]) / h
}

/// Central difference `(v[i+1] - v[i-1]) / 2h`.
///
/// Returns 0.0 at the first and last index.
pub fn central_difference(values: &[f64], i: usize, h: f64) -> f64 {
    if i == 0 || i + 1 >= values.len() {
        return 0.0;
    }
    (values[i + 1] - values[i - 1]) / (2.0 * h)
}

/// Second derivative `(v[i+1] - 2 v[i] + v[i-1]) / h²`.
///
/// Returns 0.0 at the first and last index.
pub fn second_derivative(values: &[f64], i: usize, h: f64) -> f64 {
    if i == 0 || i + 1 >= values.len() {
        return 0.0;
    }
    (values[i + 1] - 2.0 * values[i] + values[i - 1]) / (h * h)
}

/// Central-difference gradient for every index; same length as `values`.
pub fn central_differences(values: &[f64], h: f64) -> Vec<f64> {
    (0..values.len())
        .map(|i| central_difference(values, i, h))
        .collect()
}

/// Second-derivative estimate for every index; same length as `values`.
pub fn second_derivatives(values: &[f64], h: f64) -> Vec<f64> {
    (0..values.len())
        .map(|i| second_derivative(values, i, h))
        .collect()
}
