//! # survey-stats
//!
//! Statistical analysis engine for an AI-usage survey.
//!
//! This crate loads a tabular survey dataset and runs a fixed battery of
//! hypothesis tests over it, reporting for each one:
//! - A test statistic and p-value
//! - Procedure-specific auxiliary figures (degrees of freedom, expected
//!   counts, group sizes)
//! - A significance verdict at a single configured α (default 0.05)
//! - A descriptive summary table for display
//!
//! The battery covers four questions about the survey, each bound to
//! named columns:
//! - AI training vs work efficiency (Welch t-test)
//! - Usage frequency vs promotions (Mann-Whitney U on ordinal ranks)
//! - Industry vs perceived productivity (one-way ANOVA)
//! - Tools vs purpose of usage (chi-square independence)
//!
//! ## Quick Start
//!
//! ```ignore
//! use survey_stats::{analyze, output};
//!
//! let outcomes = analyze("ai_use_dataset_final.csv")?;
//! println!("{}", output::format_battery(&outcomes));
//! ```
//!
//! ## Failure isolation
//!
//! A dataset that cannot be parsed halts everything, but an analysis
//! whose columns are missing or whose groups are too small is merely
//! skipped with a reason; the rest of the battery still runs.
//!
//! Rendering (charts, widgets, page layout) is a consumer's concern: the
//! engine only produces serializable reports and a plain terminal view.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod verdict;

// Functional modules
pub mod analysis;
pub mod dataset;
pub mod output;
pub mod prepare;
pub mod stats;
pub mod summary;

// Re-exports for public API
pub use analysis::{
    battery, run_analysis, run_battery, Analysis, AnalysisOutcome, AnalysisReport, Procedure,
    SummaryTable,
};
pub use config::Config;
pub use constants::{DEFAULT_ALPHA, EXPECTED_COUNT_CAUTION, FREQUENCY_LEVELS};
pub use dataset::{Dataset, DatasetCache, Value};
pub use error::AnalysisError;
pub use result::{Auxiliary, TestMethod, TestResult};
pub use stats::{Alternative, ContingencyTable};
pub use verdict::{Hypothesis, Verdict, VerdictPolicy};

use std::path::Path;

/// Convenience entry point: load the survey from a CSV file and run the
/// whole battery with the default configuration.
///
/// # Errors
///
/// Returns [`AnalysisError::DataUnavailable`] if the file cannot be read
/// or parsed. Per-analysis failures do not error; they appear as
/// [`AnalysisOutcome::Skipped`] entries in the returned battery.
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<Vec<AnalysisOutcome>, AnalysisError> {
    let dataset = Dataset::from_csv_path(path)?;
    Ok(run_battery(&dataset, &Config::default()))
}
