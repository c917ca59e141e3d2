//! # netflux-io
//!
//! Read bandwidth samples and analysis exports from CSV, and write the
//! analysis export and the plot summary back out. Bridges files on disk into
//! the [`SampleSeries`](netflux_series::SampleSeries) model.
//!
//! | File | Header | Functions |
//! |------|--------|-----------|
//! | samples | `Hour,Bandwidth_Mbps[,...]` | [`read_samples`] |
//! | export | `Hour,Bandwidth_Mbps,Gradient_Mbps_per_hour,Second_Derivative,RK4_Prediction_Next_Day` | [`write_export`], [`read_export`] |
//! | plot summary | `Hour,Bandwidth_Mbps,Gradient,Curvature,RK4_Prediction,Peak_Indicator` | [`write_plot_summary`] |

mod error;
mod export;
mod reader;
mod records;
mod validate;
mod writer;

pub use error::IoError;
pub use export::{build_export_records, plot_records};
pub use reader::{ReaderConfig, read_export, read_samples};
pub use records::{ExportRecord, PLOT_SUMMARY_HEADER, PlotRecord, SampleRecord};
pub use writer::{write_export, write_plot_summary};
