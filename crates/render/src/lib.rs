//! # netflux-render
//!
//! Turn analysis results into text: the enhanced analysis report, ASCII
//! charts over exported rows, and GnuPlot data files with their scripts.
//!
//! Nothing here touches the filesystem or fails. Report sections and charts
//! are borrowed views implementing [`Display`](std::fmt::Display); GnuPlot
//! builders return [`Artifact`]s for the caller to write.
//!
//! ```text
//!   SeriesAnalyzer ─┐
//!   PredictedSeries ├──► AnalysisReport, GradientTable, PeakList, ...
//!   ComparisonRow ──┘
//!
//!   [PlotRecord] ──► AsciiReport, BandwidthChart, GradientChart, ...
//!                └─► bandwidth_plot, gradient_plot, rk4_plot ──► PlotBundle
//! ```
//!
//! ## Quick start
//!
//! ```
//! use std::path::Path;
//!
//! use netflux_io::PlotRecord;
//! use netflux_render::{AsciiReport, all_plots};
//!
//! let records: Vec<PlotRecord> = (0..24)
//!     .map(|h| PlotRecord {
//!         hour: h as f64,
//!         bandwidth: 10.0 + (h % 12) as f64,
//!         gradient: 1.0,
//!         curvature: 0.0,
//!         rk4_prediction: 12.0,
//!         is_peak: h == 11,
//!     })
//!     .collect();
//!
//! let report = AsciiReport::new(&records, 40).to_string();
//! assert!(report.contains("← PEAK"));
//!
//! let plots = all_plots(&records, Path::new("docs/visualizations"));
//! assert_eq!(plots.len(), 3);
//! ```

mod analysis;
mod ascii;
mod format;
mod gnuplot;

pub use analysis::{
    AnalysisReport, AnomalyList, ComparisonTable, GradientTable, PeakList, PredictionTable,
    SummarySection, VolatilitySection,
};
pub use ascii::{
    AsciiReport, BandwidthChart, ComparisonChart, GradientChart, StatisticsSummary,
    TextVisualization,
};
pub use gnuplot::{Artifact, PlotBundle, all_plots, bandwidth_plot, gradient_plot, rk4_plot};
