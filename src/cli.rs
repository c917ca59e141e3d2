use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// netflux network bandwidth analyzer.
#[derive(Parser)]
#[command(
    name = "netflux",
    version,
    about = "Network bandwidth time-series analysis and RK4 prediction"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full enhanced analysis and print or save the report.
    Analyze(AnalyzeArgs),
    /// Predict the next horizon with RK4.
    Predict(PredictArgs),
    /// Write the five-column analysis export CSV.
    Export(ExportArgs),
    /// Render ASCII charts, GnuPlot files and the plot summary from an export.
    Visualize(VisualizeArgs),
    /// Compare Lagrange extrapolation with RK4 prediction.
    Compare(CompareArgs),
    /// Integrate bandwidth over time with Simpson's rule.
    Integrate(IntegrateArgs),
    /// Evaluate the Lagrange polynomial through the samples.
    Interpolate(InterpolateArgs),
}

/// Input and configuration shared by every subcommand.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to a CSV file with `Hour` and `Bandwidth_Mbps` columns.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sort rows by hour instead of rejecting out-of-order input.
    #[arg(long)]
    pub resequence: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the anomaly gradient threshold (Mbps/hour).
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Override the peak policy (sign-change, mean-threshold, local-maximum).
    #[arg(long)]
    pub peak_policy: Option<String>,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Also write a JSON summary to this file.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the number of predicted points.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Override the RK4 step (hours).
    #[arg(long)]
    pub step: Option<f64>,

    /// Override the prediction mode (fixed-origin, chained).
    #[arg(long)]
    pub mode: Option<String>,

    /// Override the seed placement (following-step, last-sample, or an hour).
    #[arg(long)]
    pub seed: Option<String>,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path for the export CSV.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `visualize` subcommand.
#[derive(clap::Args)]
pub struct VisualizeArgs {
    /// Path to an export CSV written by `netflux export`.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the output directory from config.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Override the peak policy (sign-change, mean-threshold, local-maximum).
    #[arg(long)]
    pub peak_policy: Option<String>,

    /// Run `gnuplot` on the generated scripts.
    #[arg(long)]
    pub gnuplot: bool,
}

/// Arguments for the `compare` subcommand.
#[derive(clap::Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Query times in hours; defaults to 25.5 27 30.5 33.
    #[arg(long, num_args = 1..)]
    pub at: Vec<f64>,
}

/// Arguments for the `integrate` subcommand.
#[derive(clap::Args)]
pub struct IntegrateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// First hour of the span; defaults to the first sample.
    #[arg(long)]
    pub start: Option<f64>,

    /// Last hour of the span; defaults to the last sample.
    #[arg(long)]
    pub end: Option<f64>,
}

/// Arguments for the `interpolate` subcommand.
#[derive(clap::Args)]
pub struct InterpolateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Query times in hours.
    #[arg(long, num_args = 1.., required = true)]
    pub at: Vec<f64>,
}
