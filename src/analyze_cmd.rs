//! Analyze command: the full enhanced analysis report.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use netflux_predict::{DEFAULT_COMPARISON_TIMES, compare_methods};
use netflux_render::AnalysisReport;
use netflux_series::PeakDetectionPolicy;

use crate::cli::AnalyzeArgs;
use crate::convert;
use crate::pipeline;
use crate::sink;
use crate::summary::{AnalysisSummary, RunResults};

/// Run the enhanced analysis.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let mut config = pipeline::load_config(&args.input)?;
    if let Some(threshold) = args.threshold {
        config.analysis.anomaly_threshold = threshold;
    }
    if let Some(policy) = args.peak_policy {
        config.analysis.peak_policy = policy;
    }

    let analyzer = pipeline::load_analyzer(&args.input, &config)?;
    let policy = convert::build_peak_policy(&config.analysis)?;
    let threshold = config.analysis.anomaly_threshold;

    let peaks = analyzer.peaks(&policy).context("peak detection failed")?;
    let anomalies = analyzer
        .anomalies(threshold)
        .context("anomaly detection failed")?;
    info!(
        policy = policy.name(),
        n_peaks = peaks.len(),
        n_anomalies = anomalies.len(),
        "classification complete"
    );

    let predictor = pipeline::build_predictor(&config.predict)?;
    let predicted = predictor
        .predict(analyzer.series())
        .context("prediction failed")?;
    let comparison = compare_methods(&analyzer, &predictor, &DEFAULT_COMPARISON_TIMES)
        .context("method comparison failed")?;

    let report = AnalysisReport {
        analyzer: &analyzer,
        peaks: &peaks,
        peak_policy: policy.name(),
        anomalies: &anomalies,
        anomaly_threshold: threshold,
        predicted: &predicted,
        comparison: &comparison,
    }
    .to_string();

    match args.report {
        Some(ref path) => sink::write_text(path, &report)?,
        None => print!("{report}"),
    }

    if let Some(ref path) = args.json {
        let run = RunResults {
            analyzer: &analyzer,
            peak_policy: policy.name(),
            peaks: &peaks,
            anomaly_threshold: threshold,
            anomalies: &anomalies,
            predicted: &predicted,
            comparison: &comparison,
        };
        let summary = AnalysisSummary::new(
            args.input.input.display().to_string(),
            sink::timestamp(),
            &run,
        );
        let json =
            serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        sink::write_text(path, &json)?;
    }

    Ok(())
}
