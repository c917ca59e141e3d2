//! CSV writers for the analysis export and the plot summary.

use std::path::Path;

use tracing::info;

use crate::error::IoError;
use crate::records::{ExportRecord, PLOT_SUMMARY_HEADER, PlotRecord};

fn create_parent(path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes export rows under the header
/// `Hour,Bandwidth_Mbps,Gradient_Mbps_per_hour,Second_Derivative,RK4_Prediction_Next_Day`.
///
/// Values are written at full precision so a re-read reproduces them
/// exactly. Missing parent directories are created.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Csv`] if the file cannot be
/// written.
#[tracing::instrument(skip_all, fields(path = %path.display(), n_records = records.len()))]
pub fn write_export(path: &Path, records: &[ExportRecord]) -> Result<(), IoError> {
    create_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    if records.is_empty() {
        writer.write_record([
            "Hour",
            "Bandwidth_Mbps",
            "Gradient_Mbps_per_hour",
            "Second_Derivative",
            "RK4_Prediction_Next_Day",
        ])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("wrote export");
    Ok(())
}

/// Writes the plot summary CSV with three-decimal values and a `1`/`0` peak
/// indicator.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Csv`] if the file cannot be
/// written.
#[tracing::instrument(skip_all, fields(path = %path.display(), n_records = records.len()))]
pub fn write_plot_summary(path: &Path, records: &[PlotRecord]) -> Result<(), IoError> {
    create_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(PLOT_SUMMARY_HEADER)?;
    for record in records {
        writer.write_record(record.to_fields())?;
    }
    writer.flush()?;
    info!("wrote plot summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/export.csv");
        let rows = [ExportRecord {
            hour: 0.0,
            bandwidth: 10.5,
            gradient: 0.0,
            second_derivative: 0.0,
            rk4_prediction: 9.25,
        }];
        write_export(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Hour,Bandwidth_Mbps,Gradient_Mbps_per_hour,Second_Derivative,RK4_Prediction_Next_Day")
        );
        assert_eq!(lines.next(), Some("0.0,10.5,0.0,0.0,9.25"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_export_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        write_export(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Hour,Bandwidth_Mbps,"));
    }

    #[test]
    fn plot_summary_formatting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot_data_summary.csv");
        let rows = [
            PlotRecord {
                hour: 11.0,
                bandwidth: 18.9,
                gradient: 0.65,
                curvature: -0.2,
                rk4_prediction: 14.123456,
                is_peak: false,
            },
            PlotRecord {
                hour: 12.0,
                bandwidth: 19.4,
                gradient: 0.05,
                curvature: -0.9,
                rk4_prediction: 15.0,
                is_peak: true,
            },
        ];
        write_plot_summary(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Hour,Bandwidth_Mbps,Gradient,Curvature,RK4_Prediction,Peak_Indicator"
        );
        assert_eq!(lines[1], "11.000,18.900,0.650,-0.200,14.123,0");
        assert_eq!(lines[2], "12.000,19.400,0.050,-0.900,15.000,1");
    }
}
