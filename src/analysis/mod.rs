//! The survey analysis battery.
//!
//! Two halves:
//!
//! 1. **Battery** ([`battery`]): the declarative registry of analyses —
//!    each an id, grouping scheme, test procedure, and hypothesis wording
//! 2. **Runner** ([`run_analysis`], [`run_battery`]): generic column
//!    validation, sample preparation, test execution, and verdicts, with
//!    per-analysis failure isolation

mod battery;
mod runner;

pub use battery::{battery, columns, Analysis, Procedure};
pub use runner::{run_analysis, run_battery, AnalysisOutcome, AnalysisReport, SummaryTable};
