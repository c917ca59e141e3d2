//! CSV readers for sample and export files.

use std::path::Path;

use netflux_series::SampleSeries;
use tracing::{debug, info};

use crate::error::IoError;
use crate::records::{ExportRecord, SampleRecord};
use crate::validate::validate_samples;

/// Configuration for reading sample files.
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Sort rows by hour instead of rejecting out-of-order input.
    resequence: bool,
}

impl ReaderConfig {
    /// Creates a configuration that rejects out-of-order rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort rows by hour instead of rejecting out-of-order input. Duplicate
    /// hours are rejected either way.
    pub fn with_resequence(mut self, resequence: bool) -> Self {
        self.resequence = resequence;
        self
    }

    /// Whether rows are resequenced.
    pub fn resequence(&self) -> bool {
        self.resequence
    }
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?)
}

/// Reads `Hour,Bandwidth_Mbps` rows into a validated [`SampleSeries`].
///
/// Extra columns are ignored, so the export file written by
/// [`write_export`](crate::write_export) can be read back.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Csv`] on malformed CSV or missing columns.
/// - [`IoError::NoRecords`] if the file has no data rows.
/// - [`IoError::Validation`] listing every non-finite or negative value.
/// - [`IoError::Series`] for out-of-order or duplicate hours.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_samples(path: &Path, config: &ReaderConfig) -> Result<SampleSeries, IoError> {
    let mut reader = open(path)?;
    let rows = reader
        .deserialize::<SampleRecord>()
        .map(|r| r.map(|s| (s.hour, s.bandwidth)))
        .collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Err(IoError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    validate_samples(&rows).finish()?;

    let series = if config.resequence {
        SampleSeries::resequenced(rows)?
    } else {
        SampleSeries::new(rows)?
    };
    info!(n_samples = series.len(), "loaded samples");
    Ok(series)
}

/// Reads every column of an export file.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Csv`] on malformed CSV or missing columns.
/// - [`IoError::NoRecords`] if the file has no data rows.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_export(path: &Path) -> Result<Vec<ExportRecord>, IoError> {
    let mut reader = open(path)?;
    let records = reader
        .deserialize::<ExportRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(IoError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    debug!(n_records = records.len(), "loaded export records");
    Ok(records)
}
