//! Configuration for horizon prediction.

use std::fmt;

use netflux_numeric::DOMAIN_FLOOR;

use crate::error::PredictError;

/// How successive horizon points are integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionMode {
    /// Every point is integrated afresh from the seed.
    #[default]
    FixedOrigin,
    /// Every point is integrated from the previous predicted point.
    Chained,
}

impl fmt::Display for PredictionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FixedOrigin => "fixed-origin",
            Self::Chained => "chained",
        })
    }
}

/// Where the prediction seed sits in time. The seed bandwidth is always the
/// last observed sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SeedTime {
    /// One output interval after the last sample (hour 24 for a day sampled
    /// at hours 0..=23).
    #[default]
    FollowingStep,
    /// At the last sample's own time.
    LastSample,
    /// At an explicit time.
    At(f64),
}

/// Horizon, step and scheme for [`Predictor`](crate::Predictor).
///
/// # Example
///
/// ```
/// use netflux_predict::{PredictConfig, PredictionMode};
///
/// let config = PredictConfig::new()
///     .with_horizon(48)
///     .with_mode(PredictionMode::Chained);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PredictConfig {
    horizon: usize,
    step: f64,
    interval: f64,
    mode: PredictionMode,
    seed: SeedTime,
    floor: Option<f64>,
}

impl PredictConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: 24 points one hour apart, RK4 step 0.1, fixed-origin
    /// scheme, seed one interval after the last sample, floor 0.1.
    pub fn new() -> Self {
        Self {
            horizon: 24,
            step: 0.1,
            interval: 1.0,
            mode: PredictionMode::FixedOrigin,
            seed: SeedTime::FollowingStep,
            floor: Some(DOMAIN_FLOOR),
        }
    }

    /// Sets the number of predicted points.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the RK4 step size (hours).
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the spacing between predicted points (hours).
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the integration scheme.
    pub fn with_mode(mut self, mode: PredictionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the seed time rule.
    pub fn with_seed(mut self, seed: SeedTime) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the bandwidth floor; `None` disables clamping.
    pub fn with_floor(mut self, floor: Option<f64>) -> Self {
        self.floor = floor;
        self
    }

    /// Returns the number of predicted points.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the RK4 step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the spacing between predicted points.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns the integration scheme.
    pub fn mode(&self) -> PredictionMode {
        self.mode
    }

    /// Returns the seed time rule.
    pub fn seed(&self) -> SeedTime {
        self.seed
    }

    /// Returns the bandwidth floor.
    pub fn floor(&self) -> Option<f64> {
        self.floor
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// - [`PredictError::InvalidHorizon`] if the horizon is zero.
    /// - [`PredictError::InvalidStep`] if the step or interval is not finite
    ///   and positive.
    /// - [`PredictError::InvalidSeedTime`] for a non-finite explicit seed.
    /// - [`PredictError::InvalidParameter`] for a non-finite floor.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.horizon == 0 {
            return Err(PredictError::InvalidHorizon {
                horizon: self.horizon,
            });
        }
        for (name, value) in [("step", self.step), ("interval", self.interval)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PredictError::InvalidStep { name, value });
            }
        }
        if let SeedTime::At(time) = self.seed {
            if !time.is_finite() {
                return Err(PredictError::InvalidSeedTime { time });
            }
        }
        if let Some(floor) = self.floor {
            if !floor.is_finite() {
                return Err(PredictError::InvalidParameter {
                    name: "floor",
                    value: floor,
                });
            }
        }
        Ok(())
    }
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self::new()
    }
}
