//! Frequency distributions and descriptive statistics for one variable.
//!
//! This crate provides the analysis engine behind `freqdist`:
//!
//! - **Classification**: Decide whether a variable is categorical, discrete or continuous
//! - **Frequency tables**: Simple (one row per value) or grouped (equal-width classes)
//!   tables with relative and cumulative columns
//! - **Simple statistics**: Mean, median, mode, range and standard deviation of raw values
//! - **Grouped statistics**: The same measures estimated from class intervals
//! - **Percentiles and box plots**: Linear-interpolation quartiles and Tukey fences
//! - **Analysis reports**: The full pipeline combining all of the above
//!
//! # Modules
//!
//! - [`dataset`]: Homogeneous, non-empty datasets and token parsing
//! - [`classify`]: Variable kinds and analysis-mode inference
//! - [`config`]: Tunable policy constants
//! - [`frequency`]: Frequency table construction and Sturges' rule
//! - [`descriptive`]: Statistics computed from raw values
//! - [`grouped`]: Statistics interpolated from grouped tables
//! - [`percentiles`]: Percentile computation and storage
//! - [`box_plot`]: Quartiles and Tukey fences
//! - [`summary`]: The analysis pipeline and its report
//! - [`error`]: Validation errors
//!
//! # Examples
//!
//! ## Analyzing manual entry
//!
//! ```
//! use freqdist_stats::{
//!     config::PolicyConfig,
//!     dataset::{split_manual_entry, Dataset},
//!     summary::{AnalysisReport, AnalysisRequest},
//! };
//!
//! let dataset = Dataset::from_tokens(split_manual_entry("1, 2, 2, 3, 3, 3, 4, 5")).unwrap();
//! let report =
//!     AnalysisReport::analyze(&dataset, &AnalysisRequest::default(), &PolicyConfig::default())
//!         .unwrap();
//! assert_eq!(report.frequency_table.rows.len(), 5);
//! ```
//!
//! ## Grouping continuous data
//!
//! ```
//! use freqdist_stats::{
//!     classify::AnalysisMode,
//!     config::PolicyConfig,
//!     dataset::Dataset,
//!     summary::{AnalysisReport, AnalysisRequest},
//! };
//!
//! let dataset = Dataset::numeric((0..100).map(f64::from)).unwrap();
//! let request = AnalysisRequest {
//!     mode: Some(AnalysisMode::Grouped),
//!     bin_count: Some(10),
//!     ..AnalysisRequest::default()
//! };
//! let report = AnalysisReport::analyze(&dataset, &request, &PolicyConfig::default()).unwrap();
//! assert!(report.frequency_table.rows.iter().all(|row| row.fi == 10));
//! ```
//!
//! ## Computing quartiles
//!
//! ```
//! use freqdist_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(percentiles.get(50.0), Some(5.5));
//! ```

pub mod box_plot;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod descriptive;
pub mod error;
pub mod frequency;
pub mod grouped;
pub mod percentiles;
pub mod summary;
