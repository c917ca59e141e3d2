//! Loading steps shared by the subcommands.

use anyhow::{Context, Result};
use tracing::info;

use netflux_io::read_samples;
use netflux_predict::Predictor;
use netflux_series::SeriesAnalyzer;

use crate::cli::InputArgs;
use crate::config::{NetfluxConfig, PredictToml};
use crate::convert;

/// Loads the configuration named by `--config`, or the defaults.
pub fn load_config(input: &InputArgs) -> Result<NetfluxConfig> {
    NetfluxConfig::load(input.config.as_deref())
}

/// Reads the sample CSV and wraps it in an analyzer configured from
/// `[analysis]`.
pub fn load_analyzer(input: &InputArgs, config: &NetfluxConfig) -> Result<SeriesAnalyzer> {
    let reader_cfg = convert::build_reader_config(&config.analysis)
        .with_resequence(input.resequence || config.analysis.resequence);
    let analyzer_cfg = convert::build_analyzer_config(&config.analysis)?;

    info!(path = %input.input.display(), "reading samples");
    let series = read_samples(&input.input, &reader_cfg)
        .with_context(|| format!("failed to read samples: {}", input.input.display()))?;
    info!(n_samples = series.len(), "samples loaded");

    SeriesAnalyzer::with_config(series, analyzer_cfg).context("invalid analysis settings")
}

/// Builds the traffic-model predictor configured from `[predict]`.
pub fn build_predictor(predict: &PredictToml) -> Result<Predictor> {
    let model = convert::build_traffic_model(predict)?;
    let cfg = convert::build_predict_config(predict)?;
    Predictor::traffic(model, cfg).context("invalid prediction settings")
}
