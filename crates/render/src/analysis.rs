//! Tabular text sections of the enhanced analysis report.
//!
//! Sections borrow precomputed results; none of them can fail.

use std::fmt;

use netflux_predict::{ComparisonRow, DayPeriod, PredictedSeries, PredictionInsights};
use netflux_series::{SeriesAnalyzer, SeriesSummary};

use crate::format::{HourLabel, bar};

const RULE: usize = 64;

/// Bandwidth, gradient, curvature and trend at every sample.
#[derive(Debug, Clone, Copy)]
pub struct GradientTable<'a> {
    analyzer: &'a SeriesAnalyzer,
}

impl<'a> GradientTable<'a> {
    /// Table over every sample of `analyzer`.
    pub fn new(analyzer: &'a SeriesAnalyzer) -> Self {
        Self { analyzer }
    }
}

impl fmt::Display for GradientTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let series = self.analyzer.series();
        writeln!(f, "GRADIENT ANALYSIS")?;
        writeln!(f, "{}", bar('-', RULE))?;
        writeln!(
            f,
            "{:>5} {:>10} {:>10} {:>10}  Trend",
            "Hour", "Mbps", "dB/dt", "d2B/dt2"
        )?;
        let derived = self.analyzer.derived();
        let trends = self.analyzer.trends();
        for ((sample, d), trend) in series.iter().zip(&derived).zip(&trends) {
            writeln!(
                f,
                "{} {:>10.3} {:>+10.3} {:>+10.3}  {} {trend}",
                HourLabel(sample.time),
                sample.bandwidth,
                d.gradient,
                d.curvature,
                trend.arrow()
            )?;
        }
        Ok(())
    }
}

/// Samples flagged as peaks.
#[derive(Debug, Clone, Copy)]
pub struct PeakList<'a> {
    analyzer: &'a SeriesAnalyzer,
    peaks: &'a [usize],
    policy: &'a str,
}

impl<'a> PeakList<'a> {
    /// List of `peaks` (sample indices) found by the policy named `policy`.
    pub fn new(analyzer: &'a SeriesAnalyzer, peaks: &'a [usize], policy: &'a str) -> Self {
        Self {
            analyzer,
            peaks,
            policy,
        }
    }
}

impl fmt::Display for PeakList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PEAK DETECTION ({})", self.policy)?;
        writeln!(f, "{}", bar('-', RULE))?;
        if self.peaks.is_empty() {
            return writeln!(f, "No peaks detected.");
        }
        for sample in self.peaks.iter().filter_map(|&i| self.analyzer.series().get(i)) {
            writeln!(
                f,
                "Peak at {}: {:.3} Mbps",
                HourLabel(sample.time),
                sample.bandwidth
            )?;
        }
        writeln!(f, "Total peaks: {}", self.peaks.len())
    }
}

/// Samples whose gradient magnitude exceeds the anomaly threshold.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyList<'a> {
    analyzer: &'a SeriesAnalyzer,
    anomalies: &'a [usize],
    threshold: f64,
}

impl<'a> AnomalyList<'a> {
    /// List of `anomalies` (sample indices) found at `threshold`.
    pub fn new(analyzer: &'a SeriesAnalyzer, anomalies: &'a [usize], threshold: f64) -> Self {
        Self {
            analyzer,
            anomalies,
            threshold,
        }
    }
}

impl fmt::Display for AnomalyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ANOMALY DETECTION (|gradient| > {:.3} Mbps/hour)",
            self.threshold
        )?;
        writeln!(f, "{}", bar('-', RULE))?;
        if self.anomalies.is_empty() {
            return writeln!(f, "No anomalies detected.");
        }
        let gradients = self.analyzer.gradients();
        let series = self.analyzer.series();
        for &i in self.anomalies {
            let (Some(sample), Some(g)) = (series.get(i), gradients.get(i)) else {
                continue;
            };
            let kind = if *g > 0.0 { "surge" } else { "drop" };
            writeln!(
                f,
                "Anomaly at {}: {:+.3} Mbps/hour ({kind})",
                HourLabel(sample.time),
                g
            )?;
        }
        writeln!(f, "Total anomalies: {}", self.anomalies.len())
    }
}

/// Volatility index, its level, and capacity advice.
#[derive(Debug, Clone, Copy)]
pub struct VolatilitySection<'a> {
    summary: &'a SeriesSummary,
}

impl<'a> VolatilitySection<'a> {
    /// Section for the volatility figures of `summary`.
    pub fn new(summary: &'a SeriesSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for VolatilitySection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.summary.volatility_level;
        writeln!(f, "TRAFFIC VOLATILITY")?;
        writeln!(f, "{}", bar('-', RULE))?;
        writeln!(f, "Volatility index: {:.3}", self.summary.volatility)?;
        writeln!(f, "Level: {level}")?;
        writeln!(f, "Recommendation: {}", level.advice())
    }
}

/// Predicted bandwidth per horizon offset, annotated with the daily period.
#[derive(Debug, Clone, Copy)]
pub struct PredictionTable<'a> {
    predicted: &'a PredictedSeries,
}

impl<'a> PredictionTable<'a> {
    /// Table over every predicted point.
    pub fn new(predicted: &'a PredictedSeries) -> Self {
        Self { predicted }
    }
}

impl fmt::Display for PredictionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RK4 PREDICTION ({})", self.predicted.mode())?;
        writeln!(f, "{}", bar('-', RULE))?;
        writeln!(f, "{:>6} {:>5} {:>10}  Period", "Offset", "Time", "Mbps")?;
        for p in self.predicted.points() {
            writeln!(
                f,
                "{:>6} {} {:>10.3}  {}",
                p.offset,
                HourLabel(p.time),
                p.bandwidth,
                DayPeriod::from_offset(p.offset)
            )?;
        }
        Ok(())
    }
}

/// Lagrange and RK4 estimates side by side.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonTable<'a> {
    rows: &'a [ComparisonRow],
}

impl<'a> ComparisonTable<'a> {
    /// Table over `rows`.
    pub fn new(rows: &'a [ComparisonRow]) -> Self {
        Self { rows }
    }
}

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LAGRANGE VS RK4")?;
        writeln!(f, "{}", bar('-', RULE))?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12}",
            "Time", "Lagrange", "RK4", "Difference"
        )?;
        for row in self.rows {
            writeln!(
                f,
                "{:>8.1} {:>12.3} {:>12.3} {:>12.3}",
                row.time, row.lagrange, row.rk4, row.difference
            )?;
        }
        Ok(())
    }
}

/// Descriptive statistics of the observed series.
#[derive(Debug, Clone, Copy)]
pub struct SummarySection<'a> {
    summary: &'a SeriesSummary,
}

impl<'a> SummarySection<'a> {
    /// Section over `summary`.
    pub fn new(summary: &'a SeriesSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for SummarySection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "STATISTICS")?;
        writeln!(f, "{}", bar('-', RULE))?;
        writeln!(f, "Samples: {}", s.count)?;
        writeln!(f, "Mean: {:.3} Mbps", s.mean)?;
        writeln!(f, "Standard deviation: {:.3} Mbps", s.sd)?;
        writeln!(f, "Max: {:.3} Mbps", s.max)?;
        writeln!(f, "Min: {:.3} Mbps", s.min)?;
        writeln!(f, "Range: {:.3} Mbps", s.range)?;
        if let Some((t, g)) = s.max_gradient {
            writeln!(f, "Steepest rise: {g:+.3} Mbps/hour at {}", HourLabel(t))?;
        }
        if let Some((t, g)) = s.min_gradient {
            writeln!(f, "Steepest fall: {g:+.3} Mbps/hour at {}", HourLabel(t))?;
        }
        Ok(())
    }
}

/// The full enhanced-analysis report.
///
/// Every input is computed by the caller; the report only lays them out.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisReport<'a> {
    /// Analyzer over the observed series.
    pub analyzer: &'a SeriesAnalyzer,
    /// Peak indices.
    pub peaks: &'a [usize],
    /// Name of the policy that produced `peaks`.
    pub peak_policy: &'a str,
    /// Anomaly indices.
    pub anomalies: &'a [usize],
    /// Threshold that produced `anomalies`.
    pub anomaly_threshold: f64,
    /// Horizon prediction seeded from the observed series.
    pub predicted: &'a PredictedSeries,
    /// Lagrange versus RK4 rows.
    pub comparison: &'a [ComparisonRow],
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.analyzer.summary();
        let insights = PredictionInsights::new(
            self.analyzer.series().bandwidth(),
            &self.predicted.bandwidth(),
        );
        writeln!(f, "{}", bar('=', RULE))?;
        writeln!(f, "ENHANCED NETWORK BANDWIDTH ANALYSIS")?;
        writeln!(f, "{}", bar('=', RULE))?;
        writeln!(f)?;
        writeln!(f, "{}", SummarySection::new(&summary))?;
        writeln!(f, "{}", GradientTable::new(self.analyzer))?;
        writeln!(f, "{}", PeakList::new(self.analyzer, self.peaks, self.peak_policy))?;
        writeln!(
            f,
            "{}",
            AnomalyList::new(self.analyzer, self.anomalies, self.anomaly_threshold)
        )?;
        writeln!(f, "{}", VolatilitySection::new(&summary))?;
        writeln!(f, "{}", PredictionTable::new(self.predicted))?;
        writeln!(f, "{}", ComparisonTable::new(self.comparison))?;
        writeln!(f, "PREDICTION INSIGHTS")?;
        writeln!(f, "{}", bar('-', RULE))?;
        writeln!(f, "Predicted mean: {:.3} Mbps", insights.predicted_mean)?;
        writeln!(f, "Predicted peak: {:.3} Mbps", insights.predicted_peak)?;
        writeln!(f, "Growth factor: {:.3}x", insights.growth_factor)?;
        writeln!(f, "Outlook: {}", insights.outlook())
    }
}
