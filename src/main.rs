mod analyze_cmd;
mod cli;
mod compare_cmd;
mod config;
mod convert;
mod export_cmd;
mod integrate_cmd;
mod logging;
mod pipeline;
mod predict_cmd;
mod sink;
mod summary;
mod visualize_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Predict(args) => predict_cmd::run(args),
        Command::Export(args) => export_cmd::run(args),
        Command::Visualize(args) => visualize_cmd::run(args),
        Command::Compare(args) => compare_cmd::run(args),
        Command::Integrate(args) => integrate_cmd::run(args),
        Command::Interpolate(args) => integrate_cmd::run_interpolate(args),
    }
}
