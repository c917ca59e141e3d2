//! Configuration for series analysis.

use crate::error::SeriesError;
use crate::trend::TREND_DEADBAND;

/// Grid and classification settings for a [`SeriesAnalyzer`](crate::SeriesAnalyzer).
///
/// # Example
///
/// ```
/// use netflux_series::AnalyzerConfig;
///
/// let config = AnalyzerConfig::new().with_step(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzerConfig {
    step: f64,
    trend_deadband: f64,
}

impl AnalyzerConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `step = 1.0` (hourly samples), `trend_deadband = 0.1`.
    pub fn new() -> Self {
        Self {
            step: 1.0,
            trend_deadband: TREND_DEADBAND,
        }
    }

    /// Sets the sample spacing used by the derivative and integration kernels.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the gradient deadband for trend classification.
    pub fn with_trend_deadband(mut self, deadband: f64) -> Self {
        self.trend_deadband = deadband;
        self
    }

    /// Returns the sample spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the trend deadband.
    pub fn trend_deadband(&self) -> f64 {
        self.trend_deadband
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidStep`] if the step is not finite and
    /// positive, or [`SeriesError::InvalidThreshold`] if the deadband is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SeriesError::InvalidStep { step: self.step });
        }
        if !self.trend_deadband.is_finite() || self.trend_deadband < 0.0 {
            return Err(SeriesError::InvalidThreshold {
                reason: format!(
                    "trend deadband must be finite and non-negative, got {}",
                    self.trend_deadband
                ),
            });
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AnalyzerConfig::new();
        assert_eq!(cfg.step(), 1.0);
        assert_eq!(cfg.trend_deadband(), 0.1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = AnalyzerConfig::new()
            .with_step(0.25)
            .with_trend_deadband(0.5);
        assert_eq!(cfg.step(), 0.25);
        assert_eq!(cfg.trend_deadband(), 0.5);
    }

    #[test]
    fn validate_bad_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                AnalyzerConfig::new().with_step(step).validate(),
                Err(SeriesError::InvalidStep { .. })
            ));
        }
    }

    #[test]
    fn validate_bad_deadband() {
        assert!(
            AnalyzerConfig::new()
                .with_trend_deadband(-0.1)
                .validate()
                .is_err()
        );
    }
}
