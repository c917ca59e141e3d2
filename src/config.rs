use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level netflux configuration. Every section and field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetfluxConfig {
    /// Derivative, peak and anomaly settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// RK4 prediction settings.
    #[serde(default)]
    pub predict: PredictToml,

    /// Report and chart settings.
    #[serde(default)]
    pub render: RenderToml,
}

impl NetfluxConfig {
    /// Reads and parses `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_unit")]
    pub step: f64,
    #[serde(default = "default_anomaly_threshold")]
    pub anomaly_threshold: f64,
    #[serde(default = "default_peak_policy")]
    pub peak_policy: String,
    #[serde(default = "default_peak_factor")]
    pub peak_factor: f64,
    #[serde(default = "default_flat_gradient")]
    pub flat_gradient: f64,
    #[serde(default = "default_flat_gradient")]
    pub trend_deadband: f64,
    #[serde(default)]
    pub resequence: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            step: default_unit(),
            anomaly_threshold: default_anomaly_threshold(),
            peak_policy: default_peak_policy(),
            peak_factor: default_peak_factor(),
            flat_gradient: default_flat_gradient(),
            trend_deadband: default_flat_gradient(),
            resequence: false,
        }
    }
}

fn default_unit() -> f64 {
    1.0
}
fn default_anomaly_threshold() -> f64 {
    0.6
}
fn default_peak_policy() -> String {
    "mean-threshold".to_string()
}
fn default_peak_factor() -> f64 {
    1.2
}
fn default_flat_gradient() -> f64 {
    0.1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictToml {
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    #[serde(default = "default_rk4_step")]
    pub step: f64,
    #[serde(default = "default_unit")]
    pub interval: f64,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_seed")]
    pub seed: String,
    #[serde(default = "default_decay")]
    pub decay: f64,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_floor")]
    pub floor: f64,
}

impl Default for PredictToml {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            step: default_rk4_step(),
            interval: default_unit(),
            mode: default_mode(),
            seed: default_seed(),
            decay: default_decay(),
            amplitude: default_amplitude(),
            floor: default_floor(),
        }
    }
}

fn default_horizon() -> usize {
    24
}
fn default_rk4_step() -> f64 {
    0.1
}
fn default_mode() -> String {
    "fixed-origin".to_string()
}
fn default_seed() -> String {
    "following-step".to_string()
}
fn default_decay() -> f64 {
    0.03
}
fn default_amplitude() -> f64 {
    1.2
}
fn default_floor() -> f64 {
    0.1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            bar_width: default_bar_width(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs/visualizations")
}
fn default_bar_width() -> usize {
    40
}
