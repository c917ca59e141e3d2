//! Lagrange extrapolation versus RK4 prediction at future times.

use netflux_series::SeriesAnalyzer;

use crate::error::PredictError;
use crate::model::{DAY_HOURS, DynamicsModel};
use crate::predictor::Predictor;

/// Query times used when none are given: points in the first half of the
/// following day.
pub const DEFAULT_COMPARISON_TIMES: [f64; 4] = [25.5, 27.0, 30.5, 33.0];

/// Both estimates at one query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// Query time (hours).
    pub time: f64,
    /// Lagrange polynomial through the observed day, evaluated at the same
    /// hour of day.
    pub lagrange: f64,
    /// RK4 value integrated from the prediction seed to `time`.
    pub rk4: f64,
    /// `|lagrange - rk4|`.
    pub difference: f64,
}

/// Evaluates both methods at every query time.
///
/// The observed series covers one day, so the Lagrange estimate folds the
/// query back into it with `time mod 24` (Euclidean, so it is never
/// negative). The RK4 estimate uses the predictor's seed and step.
///
/// # Errors
///
/// Returns [`PredictError::EmptyData`] for an empty series, or a wrapped
/// kernel error for non-finite query times.
pub fn compare_methods<M: DynamicsModel>(
    analyzer: &SeriesAnalyzer,
    predictor: &Predictor<M>,
    times: &[f64],
) -> Result<Vec<ComparisonRow>, PredictError> {
    let seed = predictor.seed_from(analyzer.series())?;
    times
        .iter()
        .map(|&time| {
            let lagrange = analyzer.interpolate(time.rem_euclid(DAY_HOURS))?;
            let rk4 = predictor.integrate_to(seed, time)?;
            Ok(ComparisonRow {
                time,
                lagrange,
                rk4,
                difference: (lagrange - rk4).abs(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PredictConfig;
    use crate::model::TrafficModel;
    use approx::assert_relative_eq;
    use netflux_series::SampleSeries;

    fn analyzer() -> SeriesAnalyzer {
        let series = SampleSeries::new((0..24).map(|h| (h as f64, 5.0 + 0.5 * h as f64))).unwrap();
        SeriesAnalyzer::new(series)
    }

    #[test]
    fn folds_lagrange_into_observed_day() {
        let a = analyzer();
        let zero = |_: f64, _: f64| 0.0;
        let p = Predictor::new(zero, PredictConfig::new()).unwrap();
        let rows = compare_methods(&a, &p, &[27.0]).unwrap();
        // Linear data: Lagrange at hour 3 reproduces 5 + 1.5.
        assert_relative_eq!(rows[0].lagrange, 6.5, epsilon = 1e-6);
        // Zero model keeps the last sample.
        assert_eq!(rows[0].rk4, 16.5);
        assert_relative_eq!(rows[0].difference, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn default_times_give_one_row_each() {
        let a = analyzer();
        let p = Predictor::traffic(TrafficModel::new(), PredictConfig::new()).unwrap();
        let rows = compare_methods(&a, &p, &DEFAULT_COMPARISON_TIMES).unwrap();
        assert_eq!(rows.len(), 4);
        for (row, &t) in rows.iter().zip(DEFAULT_COMPARISON_TIMES.iter()) {
            assert_eq!(row.time, t);
            assert!(row.difference >= 0.0);
            assert!(row.rk4 >= 0.1);
        }
    }

    #[test]
    fn rk4_column_matches_predictor() {
        let a = analyzer();
        let p = Predictor::traffic(TrafficModel::new(), PredictConfig::new()).unwrap();
        let seed = p.seed_from(a.series()).unwrap();
        let rows = compare_methods(&a, &p, &[30.5]).unwrap();
        assert_eq!(rows[0].rk4, p.integrate_to(seed, 30.5).unwrap());
    }

    #[test]
    fn empty_series_rejected() {
        let a = SeriesAnalyzer::new(SampleSeries::default());
        let p = Predictor::traffic(TrafficModel::new(), PredictConfig::new()).unwrap();
        assert_eq!(
            compare_methods(&a, &p, &DEFAULT_COMPARISON_TIMES),
            Err(PredictError::EmptyData)
        );
    }
}
