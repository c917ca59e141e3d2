//! End-to-end analysis of a full day of hourly samples.

use approx::assert_relative_eq;
use netflux_series::{
    GradientSignChange, LocalMaximum, MeanThreshold, PeakPolicy, SampleSeries, SeriesAnalyzer,
    SeriesError, Trend, VolatilityLevel,
};

const DAY: [f64; 24] = [
    10.0, 12.0, 11.0, 9.0, 15.0, 14.0, 13.5, 16.0, 18.0, 17.0, 19.5, 20.0, 18.5, 17.0, 16.5,
    15.0, 14.0, 12.5, 13.0, 11.0, 10.5, 9.0, 8.5, 8.0,
];

fn day() -> SeriesAnalyzer {
    let series = SampleSeries::new(DAY.iter().enumerate().map(|(h, &b)| (h as f64, b))).unwrap();
    SeriesAnalyzer::new(series)
}

fn hand_gradients() -> Vec<f64> {
    let mut g = vec![0.0; DAY.len()];
    for i in 1..DAY.len() - 1 {
        g[i] = (DAY[i + 1] - DAY[i - 1]) / 2.0;
    }
    g
}

#[test]
fn derived_series_match_input_length() {
    let a = day();
    assert_eq!(a.gradients().len(), 24);
    assert_eq!(a.curvatures().len(), 24);
    assert_eq!(a.derived().len(), 24);
}

#[test]
fn volatility_matches_hand_rms() {
    let g = hand_gradients();
    let nonzero: Vec<f64> = g.iter().copied().filter(|&x| x != 0.0).collect();
    let expected = (nonzero.iter().map(|x| x * x).sum::<f64>() / nonzero.len() as f64).sqrt();
    assert_relative_eq!(day().volatility(), expected, epsilon = 1e-12);
}

#[test]
fn anomalies_flag_exactly_steep_gradients() {
    let expected: Vec<usize> = hand_gradients()
        .iter()
        .enumerate()
        .filter(|(_, g)| g.abs() > 0.6)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(day().anomalies(0.6).unwrap(), expected);
    assert!(!expected.is_empty());
}

#[test]
fn constant_series_is_quiet() {
    let series = SampleSeries::new((0..12).map(|h| (h as f64, 7.0))).unwrap();
    let a = SeriesAnalyzer::new(series);
    assert!(a.gradients().iter().all(|&g| g == 0.0));
    assert!(a.curvatures().iter().all(|&c| c == 0.0));
    assert_eq!(a.volatility(), 0.0);
    assert_eq!(a.volatility_level(), VolatilityLevel::Stable);
    for threshold in [1e-12, 0.1, 0.6, 5.0] {
        assert!(a.anomalies(threshold).unwrap().is_empty());
    }
    assert!(a.peaks(&GradientSignChange::new()).unwrap().is_empty());
    assert!(a.peaks(&MeanThreshold::new()).unwrap().is_empty());
    assert!(a.peaks(&LocalMaximum::new()).unwrap().is_empty());
    assert!(a.trends().iter().all(|&t| t == Trend::Stable));
}

#[test]
fn peak_policies_usable_as_trait_objects() {
    let a = day();
    let policies: Vec<Box<dyn netflux_series::PeakDetectionPolicy>> = vec![
        Box::new(GradientSignChange::new()),
        Box::new(MeanThreshold::new()),
        Box::new(LocalMaximum::relative_to_max(0.7)),
        Box::new(PeakPolicy::default()),
    ];
    for p in &policies {
        let peaks = a.peaks(p.as_ref()).unwrap();
        assert!(peaks.iter().all(|&i| i > 0 && i < 23), "{} flagged an endpoint", p.name());
    }
}

#[test]
fn local_maximum_finds_daily_top() {
    // Hour 11 (20.0) is the global maximum and a strict local maximum.
    let peaks = day().peaks(&LocalMaximum::relative_to_max(0.7)).unwrap();
    assert!(peaks.contains(&11));
}

#[test]
fn out_of_order_input_rejected_or_resequenced() {
    let mut shuffled: Vec<(f64, f64)> = DAY.iter().enumerate().map(|(h, &b)| (h as f64, b)).collect();
    shuffled.swap(3, 17);
    assert!(matches!(
        SampleSeries::new(shuffled.clone()),
        Err(SeriesError::NonIncreasingTime { .. })
    ));
    let resequenced = SampleSeries::resequenced(shuffled).unwrap();
    assert_eq!(resequenced.bandwidth(), &DAY);
}

#[test]
fn integral_over_odd_window() {
    // Hours 0..=22 give 23 points, an even number of intervals.
    let a = day();
    let total = a.integrate_between(0.0, 22.0).unwrap();
    assert!(total > 0.0);
    assert!(a.integrate().is_err());
}
