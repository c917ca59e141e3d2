//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use netflux_io::ReaderConfig;
use netflux_predict::{PredictConfig, PredictionMode, SeedTime, TrafficModel};
use netflux_series::{AnalyzerConfig, GradientSignChange, LocalMaximum, MeanThreshold, PeakPolicy};

use crate::config::{AnalysisToml, PredictToml};

/// Parses a peak policy name, applying the configured factor and flat-gradient
/// bound where the policy has them.
pub fn parse_peak_policy(name: &str, factor: f64, flat: f64) -> Result<PeakPolicy> {
    match name.to_lowercase().as_str() {
        "sign-change" => Ok(PeakPolicy::SignChange(
            GradientSignChange::new().with_flat(flat),
        )),
        "mean-threshold" => Ok(PeakPolicy::MeanThreshold(
            MeanThreshold::new().with_factor(factor).with_flat(flat),
        )),
        "local-maximum" => Ok(PeakPolicy::LocalMaximum(
            LocalMaximum::new().with_factor(factor),
        )),
        other => bail!(
            "unknown peak policy: {other:?} (expected sign-change, mean-threshold or local-maximum)"
        ),
    }
}

/// Parses a prediction mode name.
pub fn parse_mode(s: &str) -> Result<PredictionMode> {
    match s.to_lowercase().as_str() {
        "fixed-origin" => Ok(PredictionMode::FixedOrigin),
        "chained" => Ok(PredictionMode::Chained),
        other => bail!("unknown prediction mode: {other:?}"),
    }
}

/// Parses a seed placement: `following-step`, `last-sample`, or a time in
/// hours.
pub fn parse_seed(s: &str) -> Result<SeedTime> {
    match s.to_lowercase().as_str() {
        "following-step" => Ok(SeedTime::FollowingStep),
        "last-sample" => Ok(SeedTime::LastSample),
        other => match other.parse::<f64>() {
            Ok(t) => Ok(SeedTime::At(t)),
            Err(_) => bail!("unknown seed placement: {other:?}"),
        },
    }
}

/// Builds the peak policy named in the analysis section.
pub fn build_peak_policy(analysis: &AnalysisToml) -> Result<PeakPolicy> {
    parse_peak_policy(
        &analysis.peak_policy,
        analysis.peak_factor,
        analysis.flat_gradient,
    )
}

/// Builds an [`AnalyzerConfig`] from the TOML analysis section.
pub fn build_analyzer_config(analysis: &AnalysisToml) -> Result<AnalyzerConfig> {
    let cfg = AnalyzerConfig::new()
        .with_step(analysis.step)
        .with_trend_deadband(analysis.trend_deadband);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`ReaderConfig`] from the TOML analysis section.
pub fn build_reader_config(analysis: &AnalysisToml) -> ReaderConfig {
    ReaderConfig::new().with_resequence(analysis.resequence)
}

/// Builds a [`PredictConfig`] from the TOML predict section.
pub fn build_predict_config(predict: &PredictToml) -> Result<PredictConfig> {
    let cfg = PredictConfig::new()
        .with_horizon(predict.horizon)
        .with_step(predict.step)
        .with_interval(predict.interval)
        .with_mode(parse_mode(&predict.mode)?)
        .with_seed(parse_seed(&predict.seed)?)
        .with_floor(Some(predict.floor));
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`TrafficModel`] from the TOML predict section.
pub fn build_traffic_model(predict: &PredictToml) -> Result<TrafficModel> {
    let model = TrafficModel::new()
        .with_decay(predict.decay)
        .with_amplitude(predict.amplitude);
    model.validate()?;
    Ok(model)
}
