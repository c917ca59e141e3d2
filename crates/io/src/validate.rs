//! Accumulated row validation.
//!
//! [`ValidationCollector`] gathers every problem found in a file into a
//! single [`IoError::Validation`], so a user fixing a CSV sees all bad rows at
//! once instead of one per run.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise one error joining every
    /// message with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Checks `(hour, bandwidth)` pairs for values the series model rejects.
///
/// Rows are reported by their 1-based data row number (the header is not
/// counted).
pub(crate) fn validate_samples(rows: &[(f64, f64)]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &(hour, bandwidth)) in rows.iter().enumerate() {
        let row = i + 1;
        if !hour.is_finite() {
            c.push(format!("row {row}: hour is {hour}"));
        }
        if !bandwidth.is_finite() {
            c.push(format!("row {row}: bandwidth is {bandwidth}"));
        } else if bandwidth < 0.0 {
            c.push(format!("row {row}: negative bandwidth {bandwidth}"));
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        c.push("error two");
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn clean_rows_pass() {
        let rows = [(0.0, 1.0), (1.0, 0.0), (2.0, 3.5)];
        assert!(validate_samples(&rows).finish().is_ok());
    }

    #[test]
    fn every_bad_row_reported() {
        let rows = [(0.0, 1.0), (f64::NAN, -2.0), (2.0, f64::INFINITY), (3.0, -0.5)];
        let c = validate_samples(&rows);
        assert_eq!(c.len(), 4);
        match c.finish().unwrap_err() {
            IoError::Validation { details, .. } => {
                assert!(details.contains("row 2: hour is NaN"));
                assert!(details.contains("row 2: negative bandwidth -2"));
                assert!(details.contains("row 3: bandwidth is inf"));
                assert!(details.contains("row 4: negative bandwidth -0.5"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }
}
