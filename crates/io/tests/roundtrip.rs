//! Integration test: export a full analysis and read it back.

use netflux_io::{
    IoError, ReaderConfig, build_export_records, plot_records, read_export, read_samples,
    write_export, write_plot_summary,
};
use netflux_predict::{PredictConfig, Predictor, TrafficModel};
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

#[test]
fn reimported_samples_reproduce_gradients() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("enhanced_analysis_output.csv");

    let a = analyzer();
    let predictor = Predictor::traffic(TrafficModel::new(), PredictConfig::new()).unwrap();
    let predicted = predictor.predict(a.series()).unwrap();
    let rows = build_export_records(&a, &predicted).unwrap();
    write_export(&path, &rows).expect("write succeeds");

    // Only Hour and Bandwidth_Mbps are read; gradients are recomputed.
    let series = read_samples(&path, &ReaderConfig::new()).expect("read succeeds");
    let recomputed = SeriesAnalyzer::new(series).gradients();
    let exported = read_export(&path).expect("read export");
    assert_eq!(recomputed.len(), exported.len());
    for (g, row) in recomputed.iter().zip(&exported) {
        assert!((g - row.gradient).abs() < 1e-9, "{g} vs {}", row.gradient);
    }
}

#[test]
fn export_round_trip_is_exact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("export.csv");

    let a = analyzer();
    let predicted = Predictor::traffic(TrafficModel::new(), PredictConfig::new())
        .unwrap()
        .predict(a.series())
        .unwrap();
    let rows = build_export_records(&a, &predicted).unwrap();
    write_export(&path, &rows).unwrap();
    assert_eq!(read_export(&path).unwrap(), rows);
}

#[test]
fn plot_summary_from_export() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let export = dir.path().join("export.csv");
    let summary = dir.path().join("viz/plot_data_summary.csv");

    let a = analyzer();
    let predicted = Predictor::traffic(TrafficModel::new(), PredictConfig::new())
        .unwrap()
        .predict(a.series())
        .unwrap();
    write_export(&export, &build_export_records(&a, &predicted).unwrap()).unwrap();

    let records = read_export(&export).unwrap();
    let plot = plot_records(&records, &MeanThreshold::new());
    write_plot_summary(&summary, &plot).unwrap();

    let text = std::fs::read_to_string(&summary).unwrap();
    assert_eq!(text.lines().count(), 25);
    let peaks_from_analyzer = a.classify_peaks().unwrap();
    let peaks_from_plot: Vec<usize> = (0..plot.len()).filter(|&i| plot[i].is_peak).collect();
    assert_eq!(peaks_from_plot, peaks_from_analyzer);
}

#[test]
fn read_export_missing_file() {
    let err = read_export(std::path::Path::new("/tmp/netflux_no_such_export.csv")).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}
