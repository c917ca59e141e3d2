//! Integrate and interpolate commands.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::{IntegrateArgs, InterpolateArgs};
use crate::pipeline;

/// Simpson integral of bandwidth over the selected span, in Mbps·h.
pub fn run(args: IntegrateArgs) -> Result<()> {
    let _cmd = info_span!("integrate").entered();
    let config = pipeline::load_config(&args.input)?;
    let analyzer = pipeline::load_analyzer(&args.input, &config)?;
    let series = analyzer.series();
    let times = series.times();

    let start = args
        .start
        .or_else(|| times.first().copied())
        .unwrap_or_default();
    let end = match args.end {
        Some(end) => end,
        None => default_end(times, series.span(start, f64::INFINITY)),
    };
    let total = analyzer
        .integrate_between(start, end)
        .with_context(|| format!("cannot integrate over [{start}, {end}]"))?;
    info!(start, end, total, "integration complete");

    println!("Total data volume over [{start}, {end}] h: {total:.3} Mbps·h");
    println!("Average over span: {:.3} Mbps", average(total, start, end));
    Ok(())
}

/// Lagrange polynomial through every sample, evaluated at each query time.
pub fn run_interpolate(args: InterpolateArgs) -> Result<()> {
    let _cmd = info_span!("interpolate").entered();
    let config = pipeline::load_config(&args.input)?;
    let analyzer = pipeline::load_analyzer(&args.input, &config)?;

    println!("{:>8} {:>12}", "Time", "Mbps");
    for &t in &args.at {
        let value = analyzer
            .interpolate(t)
            .with_context(|| format!("cannot interpolate at {t}"))?;
        println!("{t:>8.2} {value:>12.3}");
    }
    info!(n_times = args.at.len(), "interpolation complete");
    Ok(())
}

/// Last sample time from `span.start` that leaves an odd number of points,
/// dropping the final sample when the tail has an even count.
fn default_end(times: &[f64], span: std::ops::Range<usize>) -> f64 {
    let last = if span.len() >= 2 && span.len() % 2 == 0 {
        span.end - 2
    } else {
        span.end.saturating_sub(1)
    };
    times.get(last).copied().unwrap_or_default()
}

fn average(total: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span > 0.0 { total / span } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_end_keeps_odd_point_count() {
        let times: Vec<f64> = (0..24).map(f64::from).collect();
        assert_eq!(default_end(&times, 0..24), 22.0);
        assert_eq!(default_end(&times, 1..24), 23.0);
        assert_eq!(default_end(&times, 0..0), 0.0);
    }

    #[test]
    fn average_over_span() {
        assert_eq!(average(40.0, 0.0, 4.0), 10.0);
        assert_eq!(average(40.0, 2.0, 2.0), 0.0);
    }
}
