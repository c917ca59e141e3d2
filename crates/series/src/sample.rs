//! Validated, immutable sequences of `(time, bandwidth)` samples.

use crate::error::SeriesError;

/// One bandwidth observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Hour of day (fractional hours allowed).
    pub time: f64,
    /// Bandwidth in Mbps.
    pub bandwidth: f64,
}

impl Sample {
    /// Creates a sample.
    pub fn new(time: f64, bandwidth: f64) -> Self {
        Self { time, bandwidth }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, bandwidth): (f64, f64)) -> Self {
        Self { time, bandwidth }
    }
}

/// An ordered series of samples with strictly increasing, finite times and
/// finite, non-negative bandwidth.
///
/// The series is immutable once built. Analysis types hold one by value, so
/// anything derived from it can never observe a later change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    times: Vec<f64>,
    bandwidth: Vec<f64>,
}

impl SampleSeries {
    /// Builds a series from samples that are already in time order.
    ///
    /// An empty input gives an empty series.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::NonFiniteData`] if a time or bandwidth is NaN/infinite.
    /// - [`SeriesError::NegativeBandwidth`] if a bandwidth is below zero.
    /// - [`SeriesError::NonIncreasingTime`] if a time does not exceed its
    ///   predecessor (this covers duplicates).
    pub fn new<I, S>(samples: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let samples: Vec<Sample> = samples.into_iter().map(Into::into).collect();
        validate_values(&samples)?;
        for (i, pair) in samples.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(SeriesError::NonIncreasingTime {
                    index: i + 1,
                    prev: pair[0].time,
                    time: pair[1].time,
                });
            }
        }
        Ok(Self::from_sorted(samples))
    }

    /// Builds a series from samples in any order, sorting them by time.
    ///
    /// # Errors
    ///
    /// Same value checks as [`SampleSeries::new`]; two samples with the same
    /// time give [`SeriesError::DuplicateTime`].
    pub fn resequenced<I, S>(samples: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let mut samples: Vec<Sample> = samples.into_iter().map(Into::into).collect();
        validate_values(&samples)?;
        samples.sort_by(|a, b| a.time.total_cmp(&b.time));
        if let Some(pair) = samples.windows(2).find(|p| p[0].time == p[1].time) {
            return Err(SeriesError::DuplicateTime { time: pair[0].time });
        }
        Ok(Self::from_sorted(samples))
    }

    fn from_sorted(samples: Vec<Sample>) -> Self {
        let (times, bandwidth) = samples.iter().map(|s| (s.time, s.bandwidth)).unzip();
        Self { times, bandwidth }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times, ascending.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Bandwidth values, index-aligned with [`times`](Self::times).
    pub fn bandwidth(&self) -> &[f64] {
        &self.bandwidth
    }

    /// Sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(*self.times.get(index)?, self.bandwidth[index]))
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates over the samples in time order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(&self.bandwidth)
            .map(|(&time, &bandwidth)| Sample { time, bandwidth })
    }

    /// Index range of the samples whose time lies in `[start, end]`.
    pub fn span(&self, start: f64, end: f64) -> std::ops::Range<usize> {
        let lo = self.times.partition_point(|&t| t < start);
        let hi = self.times.partition_point(|&t| t <= end);
        lo..hi.max(lo)
    }
}

fn validate_values(samples: &[Sample]) -> Result<(), SeriesError> {
    for (index, s) in samples.iter().enumerate() {
        if !s.time.is_finite() || !s.bandwidth.is_finite() {
            return Err(SeriesError::NonFiniteData { index });
        }
        if s.bandwidth < 0.0 {
            return Err(SeriesError::NegativeBandwidth {
                index,
                value: s.bandwidth,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_tuples() {
        let s = SampleSeries::new([(0.0, 10.0), (1.0, 12.0), (2.0, 11.0)]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.times(), &[0.0, 1.0, 2.0]);
        assert_eq!(s.bandwidth(), &[10.0, 12.0, 11.0]);
        assert_eq!(s.last(), Some(Sample::new(2.0, 11.0)));
    }

    #[test]
    fn empty_is_allowed() {
        let s = SampleSeries::new(Vec::<Sample>::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.last(), None);
    }

    #[test]
    fn rejects_out_of_order() {
        let err = SampleSeries::new([(0.0, 1.0), (2.0, 1.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::NonIncreasingTime {
                index: 2,
                prev: 2.0,
                time: 1.0
            }
        );
    }

    #[test]
    fn rejects_duplicate_in_order() {
        let err = SampleSeries::new([(0.0, 1.0), (0.0, 2.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::NonIncreasingTime { index: 1, .. }));
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            SampleSeries::new([(0.0, -1.0)]),
            Err(SeriesError::NegativeBandwidth { index: 0, .. })
        ));
        assert_eq!(
            SampleSeries::new([(0.0, 1.0), (f64::NAN, 1.0)]),
            Err(SeriesError::NonFiniteData { index: 1 })
        );
    }

    #[test]
    fn resequenced_sorts() {
        let s = SampleSeries::resequenced([(2.0, 5.0), (0.0, 3.0), (1.0, 4.0)]).unwrap();
        assert_eq!(s.times(), &[0.0, 1.0, 2.0]);
        assert_eq!(s.bandwidth(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn resequenced_rejects_duplicates() {
        assert_eq!(
            SampleSeries::resequenced([(2.0, 5.0), (0.0, 3.0), (2.0, 4.0)]),
            Err(SeriesError::DuplicateTime { time: 2.0 })
        );
    }

    #[test]
    fn span_selects_inclusive_range() {
        let s = SampleSeries::new((0..10).map(|h| (h as f64, 1.0))).unwrap();
        assert_eq!(s.span(2.0, 6.0), 2..7);
        assert_eq!(s.span(2.5, 6.5), 3..7);
        assert_eq!(s.span(20.0, 30.0), 10..10);
        assert_eq!(s.span(6.0, 2.0), 6..6);
    }

    #[test]
    fn iter_yields_samples() {
        let s = SampleSeries::new([(0.0, 1.0), (1.0, 2.0)]).unwrap();
        let v: Vec<Sample> = s.iter().collect();
        assert_eq!(v, vec![Sample::new(0.0, 1.0), Sample::new(1.0, 2.0)]);
    }
}
