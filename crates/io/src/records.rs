//! Row types for the CSV files netflux reads and writes.

use serde::{Deserialize, Serialize};

/// One observed sample. Columns other than `Hour` and `Bandwidth_Mbps` are
/// ignored on read, so an export file is also a valid sample file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SampleRecord {
    /// Hour of day.
    #[serde(rename = "Hour")]
    pub hour: f64,
    /// Bandwidth in Mbps.
    #[serde(rename = "Bandwidth_Mbps")]
    pub bandwidth: f64,
}

/// One row of the analysis export: the sample, its derivatives, and the
/// prediction for the same offset into the next day.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ExportRecord {
    /// Hour of day.
    #[serde(rename = "Hour")]
    pub hour: f64,
    /// Bandwidth in Mbps.
    #[serde(rename = "Bandwidth_Mbps")]
    pub bandwidth: f64,
    /// Central-difference gradient (Mbps/hour).
    #[serde(rename = "Gradient_Mbps_per_hour")]
    pub gradient: f64,
    /// Second-derivative estimate.
    #[serde(rename = "Second_Derivative")]
    pub second_derivative: f64,
    /// RK4 prediction at the same position in the predicted horizon.
    #[serde(rename = "RK4_Prediction_Next_Day")]
    pub rk4_prediction: f64,
}

/// One row of the plot summary handed to external plotting tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRecord {
    /// Hour of day.
    pub hour: f64,
    /// Bandwidth in Mbps.
    pub bandwidth: f64,
    /// Gradient (Mbps/hour).
    pub gradient: f64,
    /// Second-derivative estimate.
    pub curvature: f64,
    /// RK4 prediction.
    pub rk4_prediction: f64,
    /// Flagged by the peak policy.
    pub is_peak: bool,
}

/// Header of the plot summary CSV.
pub const PLOT_SUMMARY_HEADER: [&str; 6] = [
    "Hour",
    "Bandwidth_Mbps",
    "Gradient",
    "Curvature",
    "RK4_Prediction",
    "Peak_Indicator",
];

impl PlotRecord {
    /// Fields formatted to three decimals, peak flag as `1`/`0`.
    pub(crate) fn to_fields(self) -> [String; 6] {
        [
            format!("{:.3}", self.hour),
            format!("{:.3}", self.bandwidth),
            format!("{:.3}", self.gradient),
            format!("{:.3}", self.curvature),
            format!("{:.3}", self.rk4_prediction),
            if self.is_peak { "1" } else { "0" }.to_string(),
        ]
    }
}
