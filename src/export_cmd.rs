//! Export command: the five-column analysis CSV.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use netflux_io::{build_export_records, write_export};

use crate::cli::ExportArgs;
use crate::pipeline;

/// Run the analysis and write one export row per sample.
pub fn run(args: ExportArgs) -> Result<()> {
    let _cmd = info_span!("export").entered();
    let mut config = pipeline::load_config(&args.input)?;
    let analyzer = pipeline::load_analyzer(&args.input, &config)?;

    // One prediction per sample row.
    config.predict.horizon = analyzer.series().len();
    let predictor = pipeline::build_predictor(&config.predict)?;
    let predicted = predictor
        .predict(analyzer.series())
        .context("prediction failed")?;

    let records = build_export_records(&analyzer, &predicted).context("failed to build export")?;
    write_export(&args.output, &records)
        .with_context(|| format!("failed to write export: {}", args.output.display()))?;
    info!(path = %args.output.display(), rows = records.len(), "export written");
    Ok(())
}
