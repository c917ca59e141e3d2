//! Predict command: RK4 prediction table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use netflux_predict::PredictionInsights;
use netflux_render::PredictionTable;

use crate::cli::PredictArgs;
use crate::pipeline;

/// Run the prediction and print the table.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    let mut config = pipeline::load_config(&args.input)?;
    if let Some(horizon) = args.horizon {
        config.predict.horizon = horizon;
    }
    if let Some(step) = args.step {
        config.predict.step = step;
    }
    if let Some(mode) = args.mode {
        config.predict.mode = mode;
    }
    if let Some(seed) = args.seed {
        config.predict.seed = seed;
    }

    let analyzer = pipeline::load_analyzer(&args.input, &config)?;
    let predictor = pipeline::build_predictor(&config.predict)?;
    let predicted = predictor
        .predict(analyzer.series())
        .context("prediction failed")?;
    let insights = PredictionInsights::new(analyzer.series().bandwidth(), &predicted.bandwidth());
    info!(
        points = predicted.len(),
        growth_factor = insights.growth_factor,
        "prediction complete"
    );

    print!("{}", PredictionTable::new(&predicted));
    println!();
    println!(
        "Predicted mean {:.3} Mbps, peak {:.3} Mbps, growth {:.3}x",
        insights.predicted_mean, insights.predicted_peak, insights.growth_factor
    );
    println!("Outlook: {}", insights.outlook());
    Ok(())
}
