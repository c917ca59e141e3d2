//! Historical versus predicted traffic, summarised.

/// Predicted peak must exceed this multiple of the historical peak to count
/// as growth.
pub const GROWTH_PEAK_RATIO: f64 = 1.5;

/// Headline comparison of a prediction against the data it was seeded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInsights {
    /// Mean observed bandwidth.
    pub historical_mean: f64,
    /// Largest observed bandwidth.
    pub historical_peak: f64,
    /// Mean predicted bandwidth.
    pub predicted_mean: f64,
    /// Largest predicted bandwidth.
    pub predicted_peak: f64,
    /// `predicted_mean / historical_mean`; 0.0 when the historical mean is 0.
    pub growth_factor: f64,
    /// Predicted peak above [`GROWTH_PEAK_RATIO`] × historical peak.
    pub significant_growth: bool,
}

impl PredictionInsights {
    /// Compares predicted bandwidth values against observed ones.
    pub fn new(historical: &[f64], predicted: &[f64]) -> Self {
        let historical_mean = netflux_stats::mean(historical);
        let historical_peak = netflux_stats::max(historical);
        let predicted_mean = netflux_stats::mean(predicted);
        let predicted_peak = netflux_stats::max(predicted);
        let growth_factor = if historical_mean > 0.0 {
            predicted_mean / historical_mean
        } else {
            0.0
        };
        Self {
            historical_mean,
            historical_peak,
            predicted_mean,
            predicted_peak,
            growth_factor,
            significant_growth: predicted_peak > historical_peak * GROWTH_PEAK_RATIO,
        }
    }

    /// One-line capacity outlook.
    pub fn outlook(&self) -> &'static str {
        if self.significant_growth {
            "significant traffic growth predicted, consider capacity expansion"
        } else {
            "stable traffic evolution predicted, current capacity adequate"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PredictConfig;
    use crate::predictor::Predictor;
    use approx::assert_relative_eq;
    use netflux_series::SampleSeries;

    fn hourly(values: &[f64]) -> SampleSeries {
        SampleSeries::new(values.iter().enumerate().map(|(h, &b)| (h as f64, b))).unwrap()
    }

    #[test]
    fn flat_prediction_has_no_growth() {
        let s = hourly(&[4.0, 8.0, 6.0]);
        let zero = |_: f64, _: f64| 0.0;
        let p = Predictor::new(zero, PredictConfig::new().with_horizon(3))
            .unwrap()
            .predict(&s)
            .unwrap();
        let i = PredictionInsights::new(s.bandwidth(), &p.bandwidth());
        assert_eq!(i.historical_mean, 6.0);
        assert_eq!(i.historical_peak, 8.0);
        assert_eq!(i.predicted_mean, 6.0);
        assert_relative_eq!(i.growth_factor, 1.0);
        assert!(!i.significant_growth);
        assert!(i.outlook().starts_with("stable"));
    }

    #[test]
    fn steep_rise_flags_growth() {
        let s = hourly(&[4.0, 8.0, 6.0]);
        let surge = |_: f64, _: f64| 10.0;
        let p = Predictor::new(surge, PredictConfig::new().with_horizon(3))
            .unwrap()
            .predict(&s)
            .unwrap();
        // Last point: 6 + 2·10 = 26 > 1.5 × 8.
        let i = PredictionInsights::new(s.bandwidth(), &p.bandwidth());
        assert_relative_eq!(i.predicted_peak, 26.0, epsilon = 1e-9);
        assert!(i.significant_growth);
    }

    #[test]
    fn zero_history_gives_zero_growth_factor() {
        let s = hourly(&[0.0, 0.0, 0.0]);
        let zero = |_: f64, _: f64| 0.0;
        let p = Predictor::new(zero, PredictConfig::new().with_floor(None))
            .unwrap()
            .predict(&s)
            .unwrap();
        assert_eq!(PredictionInsights::new(s.bandwidth(), &p.bandwidth()).growth_factor, 0.0);
    }
}
