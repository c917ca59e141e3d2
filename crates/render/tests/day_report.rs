//! Integration test: render a full day from analysis through export rows.

use std::path::Path;

use netflux_io::{PlotRecord, build_export_records, plot_records};
use netflux_predict::{
    DEFAULT_COMPARISON_TIMES, PredictConfig, Predictor, TrafficModel, compare_methods,
};
use netflux_render::{AnalysisReport, AsciiReport, TextVisualization, all_plots};
use netflux_series::{MeanThreshold, SampleSeries, SeriesAnalyzer};

const DAY: [f64; 24] = [
    8.2, 7.5, 6.9, 6.4, 6.8, 7.9, 10.5, 13.8, 16.2, 17.5, 18.1, 18.9, 19.4, 19.0, 18.2, 17.6,
    17.9, 18.8, 19.6, 18.4, 15.9, 13.1, 10.8, 9.2,
];

fn analyzer() -> SeriesAnalyzer {
    let series =
        SampleSeries::new(DAY.iter().enumerate().map(|(h, &b)| (h as f64, b))).expect("valid day");
    SeriesAnalyzer::new(series)
}

fn day_records(a: &SeriesAnalyzer) -> Vec<PlotRecord> {
    let predicted = Predictor::traffic(TrafficModel::new(), PredictConfig::new())
        .unwrap()
        .predict(a.series())
        .unwrap();
    let export = build_export_records(a, &predicted).unwrap();
    plot_records(&export, &MeanThreshold::new())
}

#[test]
fn ascii_report_marks_every_peak() {
    let a = analyzer();
    let records = day_records(&a);
    let text = AsciiReport::new(&records, 40).to_string();
    let peaks = a.classify_peaks().unwrap();
    assert_eq!(text.matches("← PEAK").count(), peaks.len());
    assert!(text.contains("Total data points: 24"));
}

#[test]
fn text_visualization_matches_series_volatility() {
    let a = analyzer();
    let records = day_records(&a);
    let text = TextVisualization::new(&records, 40).to_string();
    let expected = format!("Traffic volatility index: {:.3}", a.volatility());
    assert!(text.contains(&expected), "missing {expected}");
}

#[test]
fn gnuplot_data_covers_day() {
    let records = day_records(&analyzer());
    let plots = all_plots(&records, Path::new("viz"));
    assert_eq!(plots[0].data.contents.lines().count(), 25);
    assert_eq!(plots[1].data.contents.lines().count(), 25);
    // Observed and predicted days share one file.
    assert_eq!(plots[2].data.contents.lines().count(), 49);
    assert!(plots[2].script.contents.contains("set arrow from 23.5"));
}

#[test]
fn analysis_report_lists_default_comparisons() {
    let a = analyzer();
    let predictor = Predictor::traffic(TrafficModel::new(), PredictConfig::new()).unwrap();
    let predicted = predictor.predict(a.series()).unwrap();
    let comparison = compare_methods(&a, &predictor, &DEFAULT_COMPARISON_TIMES).unwrap();
    let peaks = a.classify_peaks().unwrap();
    let anomalies = a.anomalies(0.6).unwrap();
    let text = AnalysisReport {
        analyzer: &a,
        peaks: &peaks,
        peak_policy: "mean-threshold",
        anomalies: &anomalies,
        anomaly_threshold: 0.6,
        predicted: &predicted,
        comparison: &comparison,
    }
    .to_string();
    for t in ["25.5", "27.0", "30.5", "33.0"] {
        assert!(text.lines().any(|l| l.trim_start().starts_with(t)), "missing row {t}");
    }
    assert!(text.contains(&format!("Total peaks: {}", peaks.len())));
}
