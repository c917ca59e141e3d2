//! Horizon prediction by RK4 integration of a dynamics model.

use netflux_numeric::rk4_integrate_with_floor;
use netflux_series::SampleSeries;
use tracing::debug;

use crate::config::{PredictConfig, PredictionMode, SeedTime};
use crate::error::PredictError;
use crate::model::{DynamicsModel, TrafficModel};

/// Initial condition `(t0, y0)` of a prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    /// Start time (hours).
    pub time: f64,
    /// Start bandwidth (Mbps).
    pub bandwidth: f64,
}

/// One predicted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedPoint {
    /// Position within the horizon, starting at 0 for the seed time.
    pub offset: usize,
    /// Absolute time (hours).
    pub time: f64,
    /// Predicted bandwidth (Mbps), never below the configured floor.
    pub bandwidth: f64,
}

/// An ordered, immutable series of predicted points.
///
/// Built once from a [`Seed`]; it holds no reference to the source series.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedSeries {
    seed: Seed,
    mode: PredictionMode,
    points: Vec<PredictedPoint>,
}

impl PredictedSeries {
    /// The seed this series was integrated from.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The scheme used to integrate the points.
    pub fn mode(&self) -> PredictionMode {
        self.mode
    }

    /// Predicted points, in time order.
    pub fn points(&self) -> &[PredictedPoint] {
        &self.points
    }

    /// Number of predicted points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point times.
    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Predicted bandwidth values.
    pub fn bandwidth(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.bandwidth).collect()
    }

    /// Mean predicted bandwidth; 0.0 if empty.
    pub fn mean(&self) -> f64 {
        netflux_stats::mean(&self.bandwidth())
    }

    /// Largest predicted bandwidth; 0.0 if empty.
    pub fn peak(&self) -> f64 {
        netflux_stats::max(&self.bandwidth())
    }
}

/// Extrapolates a bandwidth series by integrating a [`DynamicsModel`].
///
/// # Example
///
/// ```
/// use netflux_predict::{PredictConfig, Predictor, TrafficModel};
/// use netflux_series::SampleSeries;
///
/// let series = SampleSeries::new((0..24).map(|h| (h as f64, 10.0 + h as f64 * 0.25))).unwrap();
/// let predictor = Predictor::traffic(TrafficModel::new(), PredictConfig::new()).unwrap();
/// let predicted = predictor.predict(&series).unwrap();
///
/// assert_eq!(predicted.len(), 24);
/// assert_eq!(predicted.points()[0].time, 24.0);
/// assert_eq!(predicted.points()[0].bandwidth, 15.75);
/// ```
#[derive(Debug, Clone)]
pub struct Predictor<M = TrafficModel> {
    model: M,
    config: PredictConfig,
}

impl Predictor<TrafficModel> {
    /// Creates a predictor over a [`TrafficModel`], validating both the model
    /// and the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn traffic(model: TrafficModel, config: PredictConfig) -> Result<Self, PredictError> {
        model.validate()?;
        Self::new(model, config)
    }
}

impl<M: DynamicsModel> Predictor<M> {
    /// Creates a predictor over any model.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    pub fn new(model: M, config: PredictConfig) -> Result<Self, PredictError> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// The dynamics model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &PredictConfig {
        &self.config
    }

    /// Seed taken from the last sample of `series`, placed in time according
    /// to [`SeedTime`].
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::EmptyData`] for an empty series.
    pub fn seed_from(&self, series: &SampleSeries) -> Result<Seed, PredictError> {
        let last = series.last().ok_or(PredictError::EmptyData)?;
        let time = match self.config.seed() {
            SeedTime::FollowingStep => last.time + self.config.interval(),
            SeedTime::LastSample => last.time,
            SeedTime::At(t) => t,
        };
        debug!(time, bandwidth = last.bandwidth, "prediction seed");
        Ok(Seed {
            time,
            bandwidth: last.bandwidth,
        })
    }

    /// RK4 value at the first grid point at or beyond `target`, integrated
    /// from `seed`. A `target` at or before the seed returns the seed value.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Numeric`] for a non-finite seed or target.
    pub fn integrate_to(&self, seed: Seed, target: f64) -> Result<f64, PredictError> {
        let f = |t: f64, y: f64| self.model.rate(t, y);
        Ok(rk4_integrate_with_floor(
            &f,
            seed.time,
            seed.bandwidth,
            self.config.step(),
            target,
            self.config.floor(),
        )?)
    }

    /// Predicts [`horizon`](PredictConfig::horizon) points starting at the
    /// seed derived from `series`.
    ///
    /// # Errors
    ///
    /// See [`seed_from`](Self::seed_from) and [`predict_from`](Self::predict_from).
    #[tracing::instrument(skip_all, fields(n_samples = series.len()))]
    pub fn predict(&self, series: &SampleSeries) -> Result<PredictedSeries, PredictError> {
        let seed = self.seed_from(series)?;
        self.predict_from(seed)
    }

    /// Predicts [`horizon`](PredictConfig::horizon) points at
    /// `seed.time + k·interval`.
    ///
    /// In [`PredictionMode::FixedOrigin`] every point is integrated from the
    /// seed itself; in [`PredictionMode::Chained`] each point continues from
    /// the previous one. The first point is the seed in both modes.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Numeric`] for a non-finite seed.
    #[tracing::instrument(skip(self), fields(horizon = self.config.horizon(), mode = %self.config.mode()))]
    pub fn predict_from(&self, seed: Seed) -> Result<PredictedSeries, PredictError> {
        let horizon = self.config.horizon();
        let interval = self.config.interval();
        let mut points = Vec::with_capacity(horizon);
        let mut previous = seed;
        for offset in 0..horizon {
            let time = seed.time + offset as f64 * interval;
            let bandwidth = match self.config.mode() {
                PredictionMode::FixedOrigin => self.integrate_to(seed, time)?,
                PredictionMode::Chained => self.integrate_to(previous, time)?,
            };
            previous = Seed { time, bandwidth };
            points.push(PredictedPoint {
                offset,
                time,
                bandwidth,
            });
        }
        debug!(n_points = points.len(), "prediction complete");
        Ok(PredictedSeries {
            seed,
            mode: self.config.mode(),
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day() -> SampleSeries {
        SampleSeries::new((0..24).map(|h| (h as f64, 10.0 + (h % 7) as f64))).unwrap()
    }

    fn traffic(config: PredictConfig) -> Predictor {
        Predictor::traffic(TrafficModel::new(), config).unwrap()
    }

    #[test]
    fn seed_rules() {
        let s = day();
        let last = s.last().unwrap().bandwidth;
        let following = traffic(PredictConfig::new()).seed_from(&s).unwrap();
        assert_eq!(following, Seed { time: 24.0, bandwidth: last });

        let at_last = traffic(PredictConfig::new().with_seed(SeedTime::LastSample))
            .seed_from(&s)
            .unwrap();
        assert_eq!(at_last.time, 23.0);

        let explicit = traffic(PredictConfig::new().with_seed(SeedTime::At(100.0)))
            .seed_from(&s)
            .unwrap();
        assert_eq!(explicit.time, 100.0);
    }

    #[test]
    fn empty_series_cannot_seed() {
        let p = traffic(PredictConfig::new());
        assert_eq!(
            p.predict(&SampleSeries::default()),
            Err(PredictError::EmptyData)
        );
    }

    #[test]
    fn horizon_points_are_evenly_spaced() {
        let p = traffic(PredictConfig::new().with_horizon(5).with_interval(0.5));
        let out = p.predict(&day()).unwrap();
        assert_eq!(out.times(), vec![23.5, 24.0, 24.5, 25.0, 25.5]);
        let offsets: Vec<usize> = out.points().iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn first_point_is_seed_in_both_modes() {
        for mode in [PredictionMode::FixedOrigin, PredictionMode::Chained] {
            let out = traffic(PredictConfig::new().with_mode(mode))
                .predict(&day())
                .unwrap();
            assert_eq!(out.points()[0].bandwidth, out.seed().bandwidth);
            assert_eq!(out.mode(), mode);
        }
    }

    #[test]
    fn fixed_origin_matches_direct_integration() {
        let p = traffic(PredictConfig::new());
        let out = p.predict(&day()).unwrap();
        let seed = out.seed();
        for point in out.points() {
            assert_eq!(point.bandwidth, p.integrate_to(seed, point.time).unwrap());
        }
    }

    #[test]
    fn chained_tracks_fixed_origin_closely() {
        let fixed = traffic(PredictConfig::new()).predict(&day()).unwrap();
        let chained = traffic(PredictConfig::new().with_mode(PredictionMode::Chained))
            .predict(&day())
            .unwrap();
        for (a, b) in fixed.points().iter().zip(chained.points()) {
            assert_relative_eq!(a.bandwidth, b.bandwidth, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_model_holds_seed() {
        let zero = |_: f64, _: f64| 0.0;
        let p = Predictor::new(zero, PredictConfig::new()).unwrap();
        let out = p.predict(&day()).unwrap();
        let seed = out.seed().bandwidth;
        assert!(out.bandwidth().iter().all(|&b| b == seed));
    }

    #[test]
    fn floor_is_respected() {
        let crash = |_: f64, _: f64| -50.0;
        let p = Predictor::new(crash, PredictConfig::new()).unwrap();
        let out = p.predict(&day()).unwrap();
        assert!(out.bandwidth().iter().all(|&b| b >= 0.1));
        assert_eq!(out.points()[23].bandwidth, 0.1);
    }

    #[test]
    fn unclamped_prediction_may_go_negative() {
        let crash = |_: f64, _: f64| -50.0;
        let p = Predictor::new(crash, PredictConfig::new().with_floor(None)).unwrap();
        let out = p.predict(&day()).unwrap();
        assert!(out.points()[23].bandwidth < 0.0);
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(Predictor::traffic(TrafficModel::new(), PredictConfig::new().with_horizon(0)).is_err());
        assert!(
            Predictor::traffic(TrafficModel::new().with_decay(-1.0), PredictConfig::new()).is_err()
        );
    }

    #[test]
    fn summary_statistics() {
        let zero = |_: f64, _: f64| 0.0;
        let out = Predictor::new(zero, PredictConfig::new())
            .unwrap()
            .predict(&day())
            .unwrap();
        let seed = out.seed().bandwidth;
        assert_eq!(out.mean(), seed);
        assert_eq!(out.peak(), seed);
    }
}
