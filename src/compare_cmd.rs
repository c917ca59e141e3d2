//! Compare command: Lagrange extrapolation versus RK4 prediction.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use netflux_predict::{DEFAULT_COMPARISON_TIMES, compare_methods};
use netflux_render::ComparisonTable;

use crate::cli::CompareArgs;
use crate::pipeline;

/// Run the comparison and print the table.
pub fn run(args: CompareArgs) -> Result<()> {
    let _cmd = info_span!("compare").entered();
    let config = pipeline::load_config(&args.input)?;
    let analyzer = pipeline::load_analyzer(&args.input, &config)?;
    let predictor = pipeline::build_predictor(&config.predict)?;

    let times = if args.at.is_empty() {
        DEFAULT_COMPARISON_TIMES.to_vec()
    } else {
        args.at
    };
    let rows = compare_methods(&analyzer, &predictor, &times).context("method comparison failed")?;
    info!(n_times = rows.len(), "comparison complete");

    print!("{}", ComparisonTable::new(&rows));
    Ok(())
}
