//! Fixed-step classical Runge-Kutta (RK4) integration of `dy/dt = f(t, y)`.

use crate::error::NumericError;

/// Lowest value the integrated state may take; bandwidth cannot be
/// non-positive.
pub const DOMAIN_FLOOR: f64 = 0.1;

/// Slack when converting a time span into a step count, so that a span that
/// is an exact multiple of `h` up to round-off does not gain an extra step.
const STEP_COUNT_SLACK: f64 = 1e-9;

/// One explicit RK4 step of size `h` from `(t, y)`.
///
/// ```text
/// k1 = h·f(t, y)
/// k2 = h·f(t + h/2, y + k1/2)
/// k3 = h·f(t + h/2, y + k2/2)
/// k4 = h·f(t + h, y + k3)
/// y' = y + (k1 + 2k2 + 2k3 + k4) / 6
/// ```
pub fn rk4_step<F>(f: &F, t: f64, y: f64, h: f64) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = h * f(t, y);
    let k2 = h * f(t + h / 2.0, y + k1 / 2.0);
    let k3 = h * f(t + h / 2.0, y + k2 / 2.0);
    let k4 = h * f(t + h, y + k3);
    y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

/// Number of fixed steps of size `h` needed to reach `target` from `t0`:
/// `ceil((target - t0) / h)`, or 0 when `target <= t0`.
pub fn step_count(t0: f64, target: f64, h: f64) -> usize {
    let span = (target - t0) / h;
    if span <= 0.0 {
        return 0;
    }
    (span - STEP_COUNT_SLACK).ceil().max(0.0) as usize
}

/// Integrates from `(t0, y0)` with fixed step `h` until `t >= target`,
/// clamping the state to [`DOMAIN_FLOOR`] after every step.
///
/// The last step may overshoot: the returned value belongs to the first grid
/// point `t0 + k·h` at or beyond `target`, not to `target` itself.
///
/// # Errors
///
/// See [`rk4_integrate_with_floor`].
pub fn rk4_integrate<F>(f: &F, t0: f64, y0: f64, h: f64, target: f64) -> Result<f64, NumericError>
where
    F: Fn(f64, f64) -> f64,
{
    rk4_integrate_with_floor(f, t0, y0, h, target, Some(DOMAIN_FLOOR))
}

/// Same as [`rk4_integrate`] with an explicit floor; `None` disables
/// clamping.
///
/// Grid times are computed as `t0 + k·h` rather than accumulated, so the
/// step count is exactly [`step_count`]. When `target <= t0` no step is taken
/// and `y0` is returned untouched.
///
/// # Errors
///
/// Returns [`NumericError::InvalidStep`] if `h` is not finite and positive,
/// or [`NumericError::NonFiniteData`] if `t0`, `y0` or `target` is not finite.
pub fn rk4_integrate_with_floor<F>(
    f: &F,
    t0: f64,
    y0: f64,
    h: f64,
    target: f64,
    floor: Option<f64>,
) -> Result<f64, NumericError>
where
    F: Fn(f64, f64) -> f64,
{
    if !h.is_finite() || h <= 0.0 {
        return Err(NumericError::InvalidStep { step: h });
    }
    if !t0.is_finite() || !y0.is_finite() || !target.is_finite() {
        return Err(NumericError::NonFiniteData);
    }

    let n_steps = step_count(t0, target, h);
    let mut y = y0;
    for k in 0..n_steps {
        let t = t0 + k as f64 * h;
        y = rk4_step(f, t, y, h);
        if let Some(lo) = floor {
            if y < lo {
                y = lo;
            }
        }
    }
    Ok(y)
}
