//! Bandwidth sample series and their derivative-based analysis.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌──────────────────────┐
//!  │ SampleSeries │────▶│  SeriesAnalyzer  │────▶│ peaks / anomalies /  │
//!  │ (validated)  │     │ (gradients etc.) │     │ trend / volatility   │
//!  └──────────────┘     └──────────────────┘     └──────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use netflux_series::{GradientSignChange, SampleSeries, SeriesAnalyzer, Trend};
//!
//! let series = SampleSeries::new([(0.0, 2.0), (1.0, 3.0), (2.0, 5.0), (3.0, 6.0), (4.0, 5.0)])
//!     .unwrap();
//! let analyzer = SeriesAnalyzer::new(series);
//!
//! assert_eq!(analyzer.gradients().len(), 5);
//! assert_eq!(analyzer.trend(1).unwrap(), Trend::Increasing);
//! assert!(analyzer.peaks(&GradientSignChange::new()).is_ok());
//! ```

mod analyzer;
mod config;
mod error;
mod peaks;
mod sample;
mod trend;

pub use analyzer::{Classification, DerivedSample, SeriesAnalyzer, SeriesSummary};
pub use config::AnalyzerConfig;
pub use error::SeriesError;
pub use peaks::{
    Baseline, GradientSignChange, LocalMaximum, MeanThreshold, PeakDetectionPolicy, PeakPolicy,
    SeriesProfile,
};
pub use sample::{Sample, SampleSeries};
pub use trend::{TREND_DEADBAND, Trend, VolatilityLevel};
