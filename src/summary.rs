//! Machine-readable summary of an analysis run.

use serde::Serialize;

use netflux_predict::{ComparisonRow, PredictedSeries, PredictionInsights};
use netflux_series::SeriesAnalyzer;

#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub generated: String,
    pub input: String,
    pub samples: usize,
    pub mean: f64,
    pub sd: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub volatility: f64,
    pub volatility_level: String,
    pub peak_policy: String,
    pub peak_hours: Vec<f64>,
    pub anomaly_threshold: f64,
    pub anomaly_hours: Vec<f64>,
    pub prediction: PredictionSummary,
    pub comparison: Vec<ComparisonEntry>,
}

#[derive(Debug, Serialize)]
pub struct PredictionSummary {
    pub mode: String,
    pub seed_time: f64,
    pub points: usize,
    pub mean: f64,
    pub peak: f64,
    pub growth_factor: f64,
    pub significant_growth: bool,
}

#[derive(Debug, Serialize)]
pub struct ComparisonEntry {
    pub time: f64,
    pub lagrange: f64,
    pub rk4: f64,
    pub difference: f64,
}

impl From<&ComparisonRow> for ComparisonEntry {
    fn from(row: &ComparisonRow) -> Self {
        Self {
            time: row.time,
            lagrange: row.lagrange,
            rk4: row.rk4,
            difference: row.difference,
        }
    }
}

/// Inputs of [`AnalysisSummary::new`], as computed by the analyze command.
pub struct RunResults<'a> {
    pub analyzer: &'a SeriesAnalyzer,
    pub peak_policy: &'a str,
    pub peaks: &'a [usize],
    pub anomaly_threshold: f64,
    pub anomalies: &'a [usize],
    pub predicted: &'a PredictedSeries,
    pub comparison: &'a [ComparisonRow],
}

impl AnalysisSummary {
    pub fn new(input: String, generated: String, run: &RunResults<'_>) -> Self {
        let series = run.analyzer.series();
        let stats = run.analyzer.summary();
        let insights = PredictionInsights::new(series.bandwidth(), &run.predicted.bandwidth());
        let hours = |indices: &[usize]| -> Vec<f64> {
            indices
                .iter()
                .filter_map(|&i| series.get(i))
                .map(|s| s.time)
                .collect()
        };
        Self {
            generated,
            input,
            samples: stats.count,
            mean: stats.mean,
            sd: stats.sd,
            max: stats.max,
            min: stats.min,
            range: stats.range,
            volatility: stats.volatility,
            volatility_level: stats.volatility_level.to_string(),
            peak_policy: run.peak_policy.to_string(),
            peak_hours: hours(run.peaks),
            anomaly_threshold: run.anomaly_threshold,
            anomaly_hours: hours(run.anomalies),
            prediction: PredictionSummary {
                mode: run.predicted.mode().to_string(),
                seed_time: run.predicted.seed().time,
                points: run.predicted.len(),
                mean: insights.predicted_mean,
                peak: insights.predicted_peak,
                growth_factor: insights.growth_factor,
                significant_growth: insights.significant_growth,
            },
            comparison: run.comparison.iter().map(ComparisonEntry::from).collect(),
        }
    }
}
