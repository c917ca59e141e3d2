//! Derivative-based analysis of a sample series.

use netflux_numeric::{
    central_difference, central_differences, forward_difference, lagrange_interpolate,
    second_derivatives, simpson_integrate,
};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::SeriesError;
use crate::peaks::{MeanThreshold, PeakDetectionPolicy, SeriesProfile};
use crate::sample::SampleSeries;
use crate::trend::{Trend, VolatilityLevel};

/// Minimum number of samples for any stencil with two neighbours.
const MIN_INTERIOR_SAMPLES: usize = 3;

/// Gradient and curvature at one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSample {
    /// First-derivative estimate (Mbps/hour).
    pub gradient: f64,
    /// Second-derivative estimate (Mbps/hour²).
    pub curvature: f64,
}

/// Flags for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Flagged by the chosen peak policy.
    pub is_peak: bool,
    /// Gradient magnitude above the anomaly threshold.
    pub is_anomaly: bool,
    /// Direction of change.
    pub trend: Trend,
}

/// Descriptive statistics of a series and its gradients.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Number of samples.
    pub count: usize,
    /// Mean bandwidth.
    pub mean: f64,
    /// Sample standard deviation of bandwidth.
    pub sd: f64,
    /// Largest bandwidth.
    pub max: f64,
    /// Smallest bandwidth.
    pub min: f64,
    /// `max - min`.
    pub range: f64,
    /// Volatility index.
    pub volatility: f64,
    /// Bucketed volatility index.
    pub volatility_level: VolatilityLevel,
    /// `(time, gradient)` of the steepest rise, if any sample exists.
    pub max_gradient: Option<(f64, f64)>,
    /// `(time, gradient)` of the steepest fall, if any sample exists.
    pub min_gradient: Option<(f64, f64)>,
}

/// Analysis capability over an owned, immutable [`SampleSeries`].
///
/// Nothing is cached: every derived quantity is recomputed from the series
/// on request, so results always reflect the series the analyzer holds.
#[derive(Debug, Clone)]
pub struct SeriesAnalyzer {
    series: SampleSeries,
    config: AnalyzerConfig,
}

impl SeriesAnalyzer {
    /// Creates an analyzer with the default (hourly) configuration.
    pub fn new(series: SampleSeries) -> Self {
        Self {
            series,
            config: AnalyzerConfig::new(),
        }
    }

    /// Creates an analyzer with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    pub fn with_config(series: SampleSeries, config: AnalyzerConfig) -> Result<Self, SeriesError> {
        config.validate()?;
        Ok(Self { series, config })
    }

    /// The analysed series.
    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Central-difference gradient at every sample; 0.0 at both ends.
    pub fn gradients(&self) -> Vec<f64> {
        central_differences(self.series.bandwidth(), self.config.step())
    }

    /// Forward-difference gradient at every sample; 0.0 at the last one.
    pub fn forward_gradients(&self) -> Vec<f64> {
        let b = self.series.bandwidth();
        (0..b.len())
            .map(|i| forward_difference(b, i, self.config.step()))
            .collect()
    }

    /// Second-derivative estimate at every sample; 0.0 at both ends.
    pub fn curvatures(&self) -> Vec<f64> {
        second_derivatives(self.series.bandwidth(), self.config.step())
    }

    /// Gradient and curvature at every sample.
    pub fn derived(&self) -> Vec<DerivedSample> {
        self.gradients()
            .into_iter()
            .zip(self.curvatures())
            .map(|(gradient, curvature)| DerivedSample {
                gradient,
                curvature,
            })
            .collect()
    }

    /// Mean bandwidth; 0.0 for an empty series.
    pub fn mean(&self) -> f64 {
        netflux_stats::mean(self.series.bandwidth())
    }

    /// Root-mean-square of the nonzero gradients; 0.0 when all are zero.
    pub fn volatility(&self) -> f64 {
        netflux_stats::rms_nonzero(&self.gradients())
    }

    /// Bucketed [`volatility`](Self::volatility).
    pub fn volatility_level(&self) -> VolatilityLevel {
        VolatilityLevel::from_index(self.volatility())
    }

    /// Peak indices under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InsufficientData`] for fewer than 3 samples.
    pub fn peaks<P>(&self, policy: &P) -> Result<Vec<usize>, SeriesError>
    where
        P: PeakDetectionPolicy + ?Sized,
    {
        let n = self.series.len();
        if n < MIN_INTERIOR_SAMPLES {
            return Err(SeriesError::InsufficientData {
                n,
                min: MIN_INTERIOR_SAMPLES,
            });
        }
        let gradients = self.gradients();
        let bandwidth = self.series.bandwidth();
        let profile = SeriesProfile {
            bandwidth,
            gradients: &gradients,
            mean: self.mean(),
            max: netflux_stats::max(bandwidth),
        };
        let peaks = policy.detect(&profile);
        debug!(policy = policy.name(), n_peaks = peaks.len(), "peak detection");
        Ok(peaks)
    }

    /// Peak indices under the default [`MeanThreshold`] policy: bandwidth
    /// above 1.2× the mean with a gradient magnitude below 0.1.
    ///
    /// # Errors
    ///
    /// See [`peaks`](Self::peaks).
    pub fn classify_peaks(&self) -> Result<Vec<usize>, SeriesError> {
        self.peaks(&MeanThreshold::new())
    }

    /// Indices whose gradient magnitude exceeds `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyData`] for an empty series, or
    /// [`SeriesError::InvalidThreshold`] if `threshold` is negative or
    /// non-finite.
    pub fn anomalies(&self, threshold: f64) -> Result<Vec<usize>, SeriesError> {
        check_threshold(threshold)?;
        if self.series.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        Ok(self
            .gradients()
            .iter()
            .enumerate()
            .filter(|(_, g)| g.abs() > threshold)
            .map(|(i, _)| i)
            .collect())
    }

    /// Trend at sample `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::IndexOutOfRange`] past the end of the series.
    pub fn trend(&self, index: usize) -> Result<Trend, SeriesError> {
        let len = self.series.len();
        if index >= len {
            return Err(SeriesError::IndexOutOfRange { index, len });
        }
        let g = central_difference(self.series.bandwidth(), index, self.config.step());
        Ok(Trend::from_gradient(g, self.config.trend_deadband()))
    }

    /// Trend at every sample.
    pub fn trends(&self) -> Vec<Trend> {
        let deadband = self.config.trend_deadband();
        self.gradients()
            .into_iter()
            .map(|g| Trend::from_gradient(g, deadband))
            .collect()
    }

    /// Peak, anomaly and trend flags for every sample.
    ///
    /// # Errors
    ///
    /// Fails as [`peaks`](Self::peaks) and [`anomalies`](Self::anomalies) do.
    pub fn classify<P>(&self, policy: &P, threshold: f64) -> Result<Vec<Classification>, SeriesError>
    where
        P: PeakDetectionPolicy + ?Sized,
    {
        let peaks = self.peaks(policy)?;
        let anomalies = self.anomalies(threshold)?;
        Ok(self
            .trends()
            .into_iter()
            .enumerate()
            .map(|(i, trend)| Classification {
                is_peak: peaks.binary_search(&i).is_ok(),
                is_anomaly: anomalies.binary_search(&i).is_ok(),
                trend,
            })
            .collect())
    }

    /// Lagrange interpolation through every sample, evaluated at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyData`] for an empty series.
    pub fn interpolate(&self, time: f64) -> Result<f64, SeriesError> {
        if self.series.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        Ok(lagrange_interpolate(
            self.series.times(),
            self.series.bandwidth(),
            time,
        )?)
    }

    /// Simpson integral of bandwidth over the whole series (Mbps·h).
    ///
    /// # Errors
    ///
    /// See [`integrate_between`](Self::integrate_between).
    pub fn integrate(&self) -> Result<f64, SeriesError> {
        self.integrate_range(0..self.series.len())
    }

    /// Simpson integral over the samples whose time lies in `[start, end]`.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::EmptyData`] if no sample falls in the span.
    /// - [`SeriesError::NonUniformSpacing`] if the selected samples are not
    ///   spaced by the configured step.
    /// - [`SeriesError::Numeric`] for fewer than 3 or an even number of
    ///   selected samples.
    pub fn integrate_between(&self, start: f64, end: f64) -> Result<f64, SeriesError> {
        self.integrate_range(self.series.span(start, end))
    }

    fn integrate_range(&self, range: std::ops::Range<usize>) -> Result<f64, SeriesError> {
        if range.is_empty() {
            return Err(SeriesError::EmptyData);
        }
        let step = self.config.step();
        let times = &self.series.times()[range.clone()];
        for (k, pair) in times.windows(2).enumerate() {
            let got = pair[1] - pair[0];
            if (got - step).abs() > 1e-9 * step.max(1.0) {
                return Err(SeriesError::NonUniformSpacing {
                    index: range.start + k + 1,
                    expected: step,
                    got,
                });
            }
        }
        Ok(simpson_integrate(&self.series.bandwidth()[range], step)?)
    }

    /// Descriptive statistics of the series and its gradients.
    pub fn summary(&self) -> SeriesSummary {
        let b = self.series.bandwidth();
        let t = self.series.times();
        let gradients = self.gradients();
        let max = netflux_stats::max(b);
        let min = netflux_stats::min(b);
        let volatility = netflux_stats::rms_nonzero(&gradients);
        SeriesSummary {
            count: b.len(),
            mean: netflux_stats::mean(b),
            sd: netflux_stats::sd(b),
            max,
            min,
            range: max - min,
            volatility,
            volatility_level: VolatilityLevel::from_index(volatility),
            max_gradient: netflux_stats::argmax(&gradients).map(|(i, g)| (t[i], g)),
            min_gradient: netflux_stats::argmin(&gradients).map(|(i, g)| (t[i], g)),
        }
    }
}

fn check_threshold(threshold: f64) -> Result<(), SeriesError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(SeriesError::InvalidThreshold {
            reason: format!("anomaly threshold must be finite and non-negative, got {threshold}"),
        });
    }
    Ok(())
}
