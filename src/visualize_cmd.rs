//! Visualize command: ASCII charts, GnuPlot files and the plot summary.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use netflux_io::{plot_records, read_export, write_plot_summary};
use netflux_render::{AsciiReport, PlotBundle, TextVisualization, all_plots};
use netflux_series::PeakDetectionPolicy;

use crate::cli::VisualizeArgs;
use crate::config::NetfluxConfig;
use crate::convert;
use crate::sink;

const ASCII_REPORT: &str = "ascii_visualization_report.txt";
const TEXT_VISUALIZATION: &str = "text_visualizations.txt";
const PLOT_SUMMARY: &str = "plot_data_summary.csv";

/// Render every visualization of an export file into the output directory.
pub fn run(args: VisualizeArgs) -> Result<()> {
    let _cmd = info_span!("visualize").entered();
    let mut config = NetfluxConfig::load(args.config.as_deref())?;
    if let Some(policy) = args.peak_policy {
        config.analysis.peak_policy = policy;
    }
    let out_dir = args.out_dir.unwrap_or(config.render.output_dir);
    let width = config.render.bar_width;
    let policy = convert::build_peak_policy(&config.analysis)?;

    info!(path = %args.input.display(), "reading export");
    let export = read_export(&args.input)
        .with_context(|| format!("failed to read export: {}", args.input.display()))?;
    let records = plot_records(&export, &policy);
    info!(
        rows = records.len(),
        policy = policy.name(),
        n_peaks = records.iter().filter(|r| r.is_peak).count(),
        "plot rows ready"
    );

    let report = AsciiReport::new(&records, width)
        .with_generated(&sink::timestamp())
        .to_string();
    print!("{report}");
    sink::write_text(&out_dir.join(ASCII_REPORT), &report)?;
    sink::write_text(
        &out_dir.join(TEXT_VISUALIZATION),
        &TextVisualization::new(&records, width).to_string(),
    )?;

    let summary_path = out_dir.join(PLOT_SUMMARY);
    write_plot_summary(&summary_path, &records)
        .with_context(|| format!("failed to write plot summary: {}", summary_path.display()))?;

    for bundle in all_plots(&records, &out_dir) {
        sink::write_artifact(&out_dir, &bundle.data)?;
        let script = sink::write_artifact(&out_dir, &bundle.script)?;
        if args.gnuplot {
            run_gnuplot(&bundle, &script);
        }
    }

    info!(dir = %out_dir.display(), "visualizations written");
    Ok(())
}

/// Runs `gnuplot` on one script. A missing or failing gnuplot is reported
/// but never fails the command; the data and script files stay usable.
fn run_gnuplot(bundle: &PlotBundle, script: &Path) {
    match Command::new("gnuplot").arg(script).output() {
        Ok(out) if out.status.success() => {
            info!(plot = bundle.name, image = %bundle.image, "gnuplot rendered plot");
        }
        Ok(out) => {
            warn!(
                plot = bundle.name,
                status = %out.status,
                stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                "gnuplot failed"
            );
        }
        Err(e) => {
            warn!(plot = bundle.name, error = %e, "gnuplot not available, skipping image");
            debug!(script = %script.display(), "script left for manual rendering");
        }
    }
}
