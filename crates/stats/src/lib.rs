//! Descriptive statistics over bandwidth and gradient slices.
//!
//! Every function here is total: degenerate input (empty slices, a single
//! value, all-zero data) yields a defined sentinel instead of an error.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Root-mean-square of the values that are exactly nonzero.
///
/// Zeros are skipped rather than averaged in, so boundary entries of a
/// derivative series (defined as 0.0) do not dilute the result. Returns 0.0
/// when no value is nonzero.
pub fn rms_nonzero(data: &[f64]) -> f64 {
    let (sum_sq, count) = data
        .iter()
        .filter(|&&x| x != 0.0)
        .fold((0.0, 0usize), |(s, c), &x| (s + x * x, c + 1));
    if count == 0 {
        return 0.0;
    }
    (sum_sq / count as f64).sqrt()
}

/// Index and value of the largest element, ignoring NaN.
/// The first occurrence wins on ties. Returns `None` if no finite-comparable
/// element exists.
pub fn argmax(data: &[f64]) -> Option<(usize, f64)> {
    data.iter()
        .copied()
        .enumerate()
        .filter(|(_, x)| !x.is_nan())
        .fold(None, |best, (i, x)| match best {
            Some((_, b)) if b >= x => best,
            _ => Some((i, x)),
        })
}

/// Index and value of the smallest element, ignoring NaN.
/// The first occurrence wins on ties.
pub fn argmin(data: &[f64]) -> Option<(usize, f64)> {
    data.iter()
        .copied()
        .enumerate()
        .filter(|(_, x)| !x.is_nan())
        .fold(None, |best, (i, x)| match best {
            Some((_, b)) if b <= x => best,
            _ => Some((i, x)),
        })
}

/// Largest value, or 0.0 if empty.
pub fn max(data: &[f64]) -> f64 {
    argmax(data).map_or(0.0, |(_, v)| v)
}

/// Smallest value, or 0.0 if empty.
pub fn min(data: &[f64]) -> f64 {
    argmin(data).map_or(0.0, |(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_rms_nonzero_skips_zeros() {
        // Only 3 and -4 count: sqrt((9 + 16) / 2)
        let data = [0.0, 3.0, 0.0, -4.0, 0.0];
        assert_relative_eq!(rms_nonzero(&data), (12.5f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_rms_nonzero_all_zero() {
        assert_eq!(rms_nonzero(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_rms_nonzero_empty() {
        assert_eq!(rms_nonzero(&[]), 0.0);
    }

    #[test]
    fn test_argmax_first_wins() {
        assert_eq!(argmax(&[1.0, 5.0, 5.0, 2.0]), Some((1, 5.0)));
    }

    #[test]
    fn test_argmin_skips_nan() {
        assert_eq!(argmin(&[f64::NAN, 3.0, -1.0, -1.0]), Some((2, -1.0)));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_max_min() {
        let data = [4.0, -2.0, 9.5, 0.0];
        assert_eq!(max(&data), 9.5);
        assert_eq!(min(&data), -2.0);
    }

    #[test]
    fn test_max_min_empty() {
        assert_eq!(max(&[]), 0.0);
        assert_eq!(min(&[]), 0.0);
    }
}
