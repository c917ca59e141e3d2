//! RK4 bandwidth prediction from a fixed parametric traffic model.
//!
//! The predictor seeds an initial-value problem from the last observed sample
//! and integrates `dB/dt = f(t, B)` forward with fixed-step RK4, clamping the
//! state at a small positive floor.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌───────────────┐     ┌─────────────────┐
//!  │ SampleSeries │────▶│  Seed (t0,y0) │────▶│ PredictedSeries │
//!  │ (last point) │     │               │     │ (RK4 per point) │
//!  └──────────────┘     └───────────────┘     └─────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use netflux_predict::{DayPeriod, PredictConfig, PredictionMode, Predictor, TrafficModel};
//! use netflux_series::SampleSeries;
//!
//! let series = SampleSeries::new((0..24).map(|h| (h as f64, 12.0))).unwrap();
//! let config = PredictConfig::new().with_horizon(6).with_mode(PredictionMode::FixedOrigin);
//! let predictor = Predictor::traffic(TrafficModel::new(), config).unwrap();
//!
//! let predicted = predictor.predict(&series).unwrap();
//! assert_eq!(predicted.len(), 6);
//! assert!(predicted.bandwidth().iter().all(|&b| b >= 0.1));
//! assert_eq!(DayPeriod::from_offset(3), DayPeriod::Night);
//! ```

mod compare;
mod config;
mod error;
mod insights;
mod model;
mod period;
mod predictor;

pub use compare::{ComparisonRow, DEFAULT_COMPARISON_TIMES, compare_methods};
pub use config::{PredictConfig, PredictionMode, SeedTime};
pub use error::PredictError;
pub use insights::{GROWTH_PEAK_RATIO, PredictionInsights};
pub use model::{DAY_HOURS, DynamicsModel, TrafficModel};
pub use period::DayPeriod;
pub use predictor::{PredictedPoint, PredictedSeries, Predictor, Seed};
