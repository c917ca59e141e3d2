//! Traffic dynamics models driving the RK4 predictor.

use std::f64::consts::PI;

use crate::error::PredictError;

/// Hours in one daily cycle.
pub const DAY_HOURS: f64 = 24.0;

/// Right-hand side of `dB/dt = f(t, B)`.
pub trait DynamicsModel {
    /// Rate of change of bandwidth (Mbps/hour) at time `t` and bandwidth `bandwidth`.
    fn rate(&self, t: f64, bandwidth: f64) -> f64;
}

impl<F> DynamicsModel for F
where
    F: Fn(f64, f64) -> f64,
{
    fn rate(&self, t: f64, bandwidth: f64) -> f64 {
        self(t, bandwidth)
    }
}

/// Linear decay toward zero plus a daily sinusoidal forcing:
///
/// ```text
/// dB/dt = -decay·B + amplitude·sin(2π/24·(t − 6) + π/4)
/// ```
///
/// The parameters are fixed, not fitted to the observed series.
///
/// # Example
///
/// ```
/// use netflux_predict::{DynamicsModel, TrafficModel};
///
/// let model = TrafficModel::new();
/// // At t = 6 the forcing term is amplitude·sin(π/4).
/// let r = model.rate(6.0, 0.0);
/// assert!((r - 1.2 * std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficModel {
    decay: f64,
    amplitude: f64,
}

impl TrafficModel {
    /// Defaults: `decay = 0.03`, `amplitude = 1.2`.
    pub fn new() -> Self {
        Self {
            decay: 0.03,
            amplitude: 1.2,
        }
    }

    /// Sets the linear decay coefficient (1/hour).
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the amplitude of the daily forcing (Mbps/hour).
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Returns the decay coefficient.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Returns the forcing amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::InvalidParameter`] if either parameter is
    /// non-finite or the decay is negative.
    pub fn validate(&self) -> Result<(), PredictError> {
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(PredictError::InvalidParameter {
                name: "decay",
                value: self.decay,
            });
        }
        if !self.amplitude.is_finite() {
            return Err(PredictError::InvalidParameter {
                name: "amplitude",
                value: self.amplitude,
            });
        }
        Ok(())
    }
}

impl Default for TrafficModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicsModel for TrafficModel {
    fn rate(&self, t: f64, bandwidth: f64) -> f64 {
        let forcing = (2.0 * PI / DAY_HOURS * (t - 6.0) + PI / 4.0).sin();
        -self.decay * bandwidth + self.amplitude * forcing
    }
}
