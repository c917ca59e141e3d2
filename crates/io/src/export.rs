//! Assembling export and plot rows from analysis results.

use netflux_predict::PredictedSeries;
use netflux_series::{PeakDetectionPolicy, SeriesAnalyzer, SeriesProfile};

use crate::error::IoError;
use crate::records::{ExportRecord, PlotRecord};

/// One export row per sample: hour, bandwidth, gradient, second derivative,
/// and the predicted value at the same index of `predicted`.
///
/// # Errors
///
/// Returns [`IoError::LengthMismatch`] if `predicted` has fewer points than
/// the series has samples.
pub fn build_export_records(
    analyzer: &SeriesAnalyzer,
    predicted: &PredictedSeries,
) -> Result<Vec<ExportRecord>, IoError> {
    let series = analyzer.series();
    if predicted.len() < series.len() {
        return Err(IoError::LengthMismatch {
            samples: series.len(),
            predictions: predicted.len(),
        });
    }
    Ok(series
        .iter()
        .zip(analyzer.derived())
        .zip(predicted.points())
        .map(|((sample, derived), point)| ExportRecord {
            hour: sample.time,
            bandwidth: sample.bandwidth,
            gradient: derived.gradient,
            second_derivative: derived.curvature,
            rk4_prediction: point.bandwidth,
        })
        .collect())
}

/// Plot rows for exported data, flagging peaks with `policy` applied to the
/// exported gradient column.
pub fn plot_records<P>(records: &[ExportRecord], policy: &P) -> Vec<PlotRecord>
where
    P: PeakDetectionPolicy + ?Sized,
{
    let bandwidth: Vec<f64> = records.iter().map(|r| r.bandwidth).collect();
    let gradients: Vec<f64> = records.iter().map(|r| r.gradient).collect();
    let profile = SeriesProfile {
        bandwidth: &bandwidth,
        gradients: &gradients,
        mean: netflux_stats::mean(&bandwidth),
        max: netflux_stats::max(&bandwidth),
    };
    let peaks = policy.detect(&profile);
    records
        .iter()
        .enumerate()
        .map(|(i, r)| PlotRecord {
            hour: r.hour,
            bandwidth: r.bandwidth,
            gradient: r.gradient,
            curvature: r.second_derivative,
            rk4_prediction: r.rk4_prediction,
            is_peak: peaks.binary_search(&i).is_ok(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netflux_predict::{PredictConfig, Predictor};
    use netflux_series::{MeanThreshold, SampleSeries};

    fn analyzer(values: &[f64]) -> SeriesAnalyzer {
        let series =
            SampleSeries::new(values.iter().enumerate().map(|(h, &b)| (h as f64, b))).unwrap();
        SeriesAnalyzer::new(series)
    }

    fn flat_prediction(a: &SeriesAnalyzer, horizon: usize) -> PredictedSeries {
        let zero = |_: f64, _: f64| 0.0;
        Predictor::new(zero, PredictConfig::new().with_horizon(horizon))
            .unwrap()
            .predict(a.series())
            .unwrap()
    }

    #[test]
    fn rows_align_with_samples() {
        let a = analyzer(&[10.0, 12.0, 11.0, 9.0, 15.0]);
        let p = flat_prediction(&a, 5);
        let rows = build_export_records(&a, &p).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].hour, 2.0);
        assert_eq!(rows[2].gradient, -1.5);
        assert_eq!(rows[2].second_derivative, -1.0);
        assert!(rows.iter().all(|r| r.rk4_prediction == 15.0));
        assert_eq!(rows[0].gradient, 0.0);
        assert_eq!(rows[4].second_derivative, 0.0);
    }

    #[test]
    fn longer_prediction_is_truncated() {
        let a = analyzer(&[1.0, 2.0, 3.0]);
        let p = flat_prediction(&a, 10);
        assert_eq!(build_export_records(&a, &p).unwrap().len(), 3);
    }

    #[test]
    fn short_prediction_rejected() {
        let a = analyzer(&[1.0, 2.0, 3.0]);
        let p = flat_prediction(&a, 2);
        assert!(matches!(
            build_export_records(&a, &p),
            Err(IoError::LengthMismatch {
                samples: 3,
                predictions: 2
            })
        ));
    }

    #[test]
    fn plot_rows_flag_peaks() {
        let a = analyzer(&[2.0, 3.0, 5.0, 6.0, 5.0, 3.0, 2.0]);
        let p = flat_prediction(&a, 7);
        let rows = build_export_records(&a, &p).unwrap();
        let plot = plot_records(&rows, &MeanThreshold::new());
        let flagged: Vec<usize> = (0..plot.len()).filter(|&i| plot[i].is_peak).collect();
        assert_eq!(flagged, vec![3]);
        assert_eq!(plot[3].curvature, rows[3].second_derivative);
    }
}
