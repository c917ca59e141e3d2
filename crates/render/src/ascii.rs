//! ASCII charts over exported analysis rows.
//!
//! Every chart is a borrowed view implementing [`fmt::Display`]; call
//! `to_string()` for the text or `write!` it into any sink.

use std::fmt;

use netflux_io::PlotRecord;
use netflux_predict::PredictionInsights;
use netflux_series::{TREND_DEADBAND, Trend, VolatilityLevel};

use crate::format::{HourLabel, bar, bar_len};

/// Gradient magnitude below which the centred chart draws a dot.
const CHART_DEADBAND: f64 = 0.05;
/// Cells on each side of the centre line of the gradient chart.
const GRADIENT_HALF: usize = 20;
/// Cells the steepest gradient reaches from the centre line.
const GRADIENT_REACH: f64 = 15.0;

fn column(records: &[PlotRecord], f: impl Fn(&PlotRecord) -> f64) -> Vec<f64> {
    records.iter().map(f).collect()
}

/// Horizontal bar per sample, scaled to the largest bandwidth, with peak
/// markers.
#[derive(Debug, Clone, Copy)]
pub struct BandwidthChart<'a> {
    records: &'a [PlotRecord],
    width: usize,
}

impl<'a> BandwidthChart<'a> {
    /// Chart whose longest bar is `width` cells.
    pub fn new(records: &'a [PlotRecord], width: usize) -> Self {
        Self { records, width }
    }
}

impl fmt::Display for BandwidthChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;
        let max = netflux_stats::max(&column(self.records, |r| r.bandwidth));
        writeln!(f, "BANDWIDTH CHART ({} SAMPLES)", self.records.len())?;
        writeln!(f, "{}", bar('=', width + 22))?;
        writeln!(
            f,
            "Scale: 0 Mbps{}{max:.2} Mbps",
            " ".repeat(width.saturating_sub(6))
        )?;
        let edge = format!("      |{}|", bar('-', width));
        writeln!(f, "{edge}")?;
        for r in self.records {
            let cells = bar('█', bar_len(r.bandwidth, max, width));
            let marker = if r.is_peak { " ← PEAK" } else { "" };
            writeln!(
                f,
                "{} |{cells:<width$}|{:>7.2}{marker}",
                HourLabel(r.hour),
                r.bandwidth
            )?;
        }
        writeln!(f, "{edge}")
    }
}

/// Gradient per sample drawn outward from a centre line: `>` to the right
/// when rising, `<` to the left when falling, `•` when flat.
#[derive(Debug, Clone, Copy)]
pub struct GradientChart<'a> {
    records: &'a [PlotRecord],
}

impl<'a> GradientChart<'a> {
    /// Chart over `records`.
    pub fn new(records: &'a [PlotRecord]) -> Self {
        Self { records }
    }
}

impl fmt::Display for GradientChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self
            .records
            .iter()
            .map(|r| r.gradient.abs())
            .fold(0.0, f64::max);
        let span = 2 * GRADIENT_HALF;
        writeln!(f, "GRADIENT ANALYSIS (RATE OF CHANGE)")?;
        writeln!(f, "{}", bar('=', 60))?;
        writeln!(f, " Hour|  Gradient|Visualization")?;
        writeln!(f, "-----|----------|{}", bar('-', span))?;
        for r in self.records {
            let g = r.gradient;
            let offset = if range > 0.0 {
                (g / range * GRADIENT_REACH) as isize
            } else {
                0
            };
            let pos = (GRADIENT_HALF as isize + offset).clamp(0, span as isize - 1) as usize;
            let mut cells = vec![' '; span];
            cells[GRADIENT_HALF] = '|';
            let trend = Trend::from_gradient(g, CHART_DEADBAND);
            match trend {
                Trend::Increasing => cells[GRADIENT_HALF..=pos].fill('>'),
                Trend::Decreasing => cells[pos..=GRADIENT_HALF].fill('<'),
                Trend::Stable => cells[GRADIENT_HALF] = '•',
            }
            let cells: String = cells.into_iter().collect();
            writeln!(
                f,
                "{}|{g:>10.3}|{cells} {} {trend}",
                HourLabel(r.hour),
                trend.arrow()
            )?;
        }
        Ok(())
    }
}

/// Observed and predicted bandwidth side by side, as paired bars on a
/// shared scale.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonChart<'a> {
    records: &'a [PlotRecord],
    width: usize,
}

impl<'a> ComparisonChart<'a> {
    /// Chart whose longest bar is `width` cells.
    pub fn new(records: &'a [PlotRecord], width: usize) -> Self {
        Self { records, width }
    }
}

impl fmt::Display for ComparisonChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;
        let max = netflux_stats::max(&column(self.records, |r| r.bandwidth))
            .max(netflux_stats::max(&column(self.records, |r| r.rk4_prediction)));
        writeln!(f, "RK4 PREDICTION VS HISTORICAL")?;
        writeln!(f, "{}", bar('=', width + 40))?;
        writeln!(f, " Hour| Historical| Prediction|Comparison Chart")?;
        writeln!(f, "-----|-----------|-----------|{}", bar('-', width + 2))?;
        for r in self.records {
            let hist = bar('█', bar_len(r.bandwidth, max, width));
            let pred = bar('▓', bar_len(r.rk4_prediction, max, width));
            writeln!(
                f,
                "{}|{:>11.2}|{:>11.2}|H:{hist}",
                HourLabel(r.hour),
                r.bandwidth,
                r.rk4_prediction
            )?;
            writeln!(f, "     |           |           |P:{pred}")?;
        }
        writeln!(f)?;
        writeln!(f, "Legend: H=Historical █, P=Predicted ▓")
    }
}

/// Headline statistics of the observed and predicted columns, with capacity
/// advice.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsSummary<'a> {
    records: &'a [PlotRecord],
}

impl<'a> StatisticsSummary<'a> {
    /// Summary over `records`.
    pub fn new(records: &'a [PlotRecord]) -> Self {
        Self { records }
    }
}

impl fmt::Display for StatisticsSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bandwidth = column(self.records, |r| r.bandwidth);
        let gradients = column(self.records, |r| r.gradient);
        let predicted = column(self.records, |r| r.rk4_prediction);
        let max = netflux_stats::max(&bandwidth);
        let min = netflux_stats::min(&bandwidth);
        let volatility = netflux_stats::rms_nonzero(&gradients);
        let level = VolatilityLevel::from_index(volatility);
        let peak_count = self.records.iter().filter(|r| r.is_peak).count();
        let insights = PredictionInsights::new(&bandwidth, &predicted);

        writeln!(f, "STATISTICS SUMMARY")?;
        writeln!(f, "{}", bar('=', 50))?;
        writeln!(f, "Total data points: {}", self.records.len())?;
        writeln!(f, "Average bandwidth: {:.3} Mbps", insights.historical_mean)?;
        writeln!(f, "Peak bandwidth: {max:.3} Mbps")?;
        writeln!(f, "Minimum bandwidth: {min:.3} Mbps")?;
        writeln!(f, "Bandwidth range: {:.3} Mbps", max - min)?;
        writeln!(f, "Traffic volatility: {volatility:.3} ({level})")?;
        writeln!(f, "Peak count: {peak_count}")?;
        writeln!(
            f,
            "Max gradient: {:+.3} Mbps/hour (acceleration)",
            netflux_stats::max(&gradients)
        )?;
        writeln!(
            f,
            "Min gradient: {:+.3} Mbps/hour (deceleration)",
            netflux_stats::min(&gradients)
        )?;
        writeln!(f)?;
        writeln!(f, "RK4 PREDICTION ANALYSIS")?;
        writeln!(f, "Predicted average: {:.3} Mbps", insights.predicted_mean)?;
        writeln!(f, "Predicted peak: {:.3} Mbps", insights.predicted_peak)?;
        writeln!(f, "Growth factor: {:.3}x from historical", insights.growth_factor)?;
        writeln!(f)?;
        writeln!(f, "INSIGHTS")?;
        writeln!(f, "- Network traffic is {level}: {}", level.advice())?;
        writeln!(f, "- RK4: {}", insights.outlook())
    }
}

/// Bandwidth distribution, trend table and key figures in a compact,
/// plot-free layout.
#[derive(Debug, Clone, Copy)]
pub struct TextVisualization<'a> {
    records: &'a [PlotRecord],
    width: usize,
}

impl<'a> TextVisualization<'a> {
    /// Visualization whose longest bar is `width` cells.
    pub fn new(records: &'a [PlotRecord], width: usize) -> Self {
        Self { records, width }
    }
}

impl fmt::Display for TextVisualization<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bandwidth = column(self.records, |r| r.bandwidth);
        let gradients = column(self.records, |r| r.gradient);
        let max = netflux_stats::max(&bandwidth);
        let volatility = netflux_stats::rms_nonzero(&gradients);

        writeln!(f, "{}", bar('=', 41))?;
        writeln!(f, "    BANDWIDTH ANALYSIS VISUALIZATION")?;
        writeln!(f, "{}", bar('=', 41))?;
        writeln!(f)?;
        writeln!(f, "BANDWIDTH DISTRIBUTION:")?;
        writeln!(f, " Hour|Bandwidth |Graph")?;
        writeln!(f, "-----|----------|{}", bar('-', self.width + 10))?;
        for r in self.records {
            let cells = bar('█', bar_len(r.bandwidth, max, self.width));
            let marker = if r.is_peak { " ← PEAK" } else { "" };
            writeln!(
                f,
                "{}|{:>9.3} |{cells}{marker}",
                HourLabel(r.hour),
                r.bandwidth
            )?;
        }
        writeln!(f)?;
        writeln!(f, "GRADIENT ANALYSIS:")?;
        writeln!(f, " Hour|Gradient  |Trend")?;
        writeln!(f, "-----|----------|-----")?;
        for r in self.records {
            let trend = Trend::from_gradient(r.gradient, TREND_DEADBAND);
            writeln!(
                f,
                "{}|{:>9.3} |{} {trend}",
                HourLabel(r.hour),
                r.gradient,
                trend.arrow()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "STATISTICS SUMMARY:")?;
        writeln!(f, "- Total data points: {}", self.records.len())?;
        writeln!(
            f,
            "- Average bandwidth: {:.3} Mbps",
            netflux_stats::mean(&bandwidth)
        )?;
        writeln!(f, "- Peak bandwidth: {max:.3} Mbps")?;
        writeln!(f, "- Traffic volatility index: {volatility:.3}")?;
        writeln!(
            f,
            "- Peak count detected: {}",
            self.records.iter().filter(|r| r.is_peak).count()
        )?;
        writeln!(
            f,
            "- Traffic status: {}",
            VolatilityLevel::from_index(volatility)
        )
    }
}

/// Every ASCII chart and the statistics summary under one header.
#[derive(Debug, Clone, Copy)]
pub struct AsciiReport<'a> {
    records: &'a [PlotRecord],
    width: usize,
    generated: Option<&'a str>,
}

impl<'a> AsciiReport<'a> {
    /// Report whose longest bars are `width` cells.
    pub fn new(records: &'a [PlotRecord], width: usize) -> Self {
        Self {
            records,
            width,
            generated: None,
        }
    }

    /// Adds a `Generated:` line with the given timestamp.
    pub fn with_generated(mut self, timestamp: &'a str) -> Self {
        self.generated = Some(timestamp);
        self
    }
}

impl fmt::Display for AsciiReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NETWORK BANDWIDTH ANALYSIS - ASCII VISUALIZATION REPORT")?;
        if let Some(ts) = self.generated {
            writeln!(f, "Generated: {ts}")?;
        }
        writeln!(f, "{}", bar('=', 60))?;
        writeln!(f)?;
        writeln!(f, "{}", BandwidthChart::new(self.records, self.width))?;
        writeln!(f, "{}", GradientChart::new(self.records))?;
        writeln!(f, "{}", ComparisonChart::new(self.records, self.width / 2))?;
        write!(f, "{}", StatisticsSummary::new(self.records))
    }
}
