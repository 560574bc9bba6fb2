//! Running analyses against a dataset.

use serde::Serialize;

use crate::analysis::battery::{battery, Analysis, Procedure};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::AnalysisError;
use crate::prepare::{crosstab, split, split_by_category, split_ranks, OrdinalScale};
use crate::result::TestResult;
use crate::stats::{
    chi_square_independence, mann_whitney_u, one_way_anova, welch_t_test, ContingencyTable,
};
use crate::summary::{summarize_groups, GroupSummary};
use crate::verdict::{Verdict, VerdictPolicy};

/// Data table accompanying a report, for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub enum SummaryTable {
    /// Mean/σ/count rows per group.
    Groups(Vec<GroupSummary>),
    /// Cross-tabulated counts with row-normalized percentages.
    CrossTab {
        /// Observed counts.
        counts: ContingencyTable,
        /// Each row rescaled to percentages summing to 100.
        row_percentages: Vec<Vec<f64>>,
    },
}

/// Everything the presentation layer needs to render one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Stable identifier of the analysis.
    pub id: String,
    /// Human-readable question.
    pub title: String,
    /// Descriptive table for display alongside the test.
    pub summary: SummaryTable,
    /// The test outcome.
    pub test: TestResult,
    /// The significance conclusion.
    pub verdict: Verdict,
}

/// Outcome of one battery entry: a finished report, or the reason it was
/// skipped. A skipped analysis never prevents the others from running.
#[derive(Debug, Clone, Serialize)]
pub enum AnalysisOutcome {
    /// Analysis completed and produced a report.
    Completed(AnalysisReport),
    /// Analysis could not run; the battery continued without it.
    Skipped {
        /// Identifier of the skipped analysis.
        id: String,
        /// Human-readable question.
        title: String,
        /// Why it was skipped (missing column, insufficient data).
        reason: String,
    },
}

impl AnalysisOutcome {
    /// The report, if the analysis completed.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Completed(report) => Some(report),
            AnalysisOutcome::Skipped { .. } => None,
        }
    }

    /// True if the analysis completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, AnalysisOutcome::Completed(_))
    }
}

/// Run a single analysis: validate its columns, prepare the samples, run
/// the test, and decide the verdict.
///
/// # Errors
///
/// Returns [`AnalysisError::ColumnNotFound`] if a required column is
/// absent, or [`AnalysisError::InsufficientData`] if the prepared samples
/// fail the test's preconditions.
pub fn run_analysis(
    analysis: &Analysis,
    dataset: &Dataset,
    config: &Config,
) -> Result<AnalysisReport, AnalysisError> {
    for column in analysis.procedure.required_columns() {
        if !dataset.has_column(column) {
            return Err(AnalysisError::ColumnNotFound(column.to_string()));
        }
    }

    let (summary, test) = match &analysis.procedure {
        Procedure::WelchT {
            group_column,
            value_column,
            groups,
        } => {
            let samples = split(dataset, group_column, value_column, groups)?;
            let test = welch_t_test(&samples[0].1, &samples[1].1)?;
            (SummaryTable::Groups(summarize_groups(&samples)), test)
        }
        Procedure::MannWhitneyU {
            ordinal_column,
            levels,
            group_column,
            groups,
            alternative,
        } => {
            let scale = OrdinalScale::new(levels);
            let samples = split_ranks(dataset, ordinal_column, &scale, group_column, groups)?;
            let test = mann_whitney_u(&samples[0].1, &samples[1].1, *alternative)?;
            let counts = crosstab(dataset, ordinal_column, group_column)?;
            let row_percentages = counts.row_percentages();
            (
                SummaryTable::CrossTab {
                    counts,
                    row_percentages,
                },
                test,
            )
        }
        Procedure::OneWayAnova {
            group_column,
            value_column,
        } => {
            let samples = split_by_category(dataset, group_column, value_column)?;
            let groups: Vec<Vec<f64>> = samples.iter().map(|(_, s)| s.clone()).collect();
            let test = one_way_anova(&groups)?;
            (SummaryTable::Groups(summarize_groups(&samples)), test)
        }
        Procedure::ChiSquareIndependence {
            row_column,
            col_column,
        } => {
            let counts = crosstab(dataset, row_column, col_column)?;
            let test = chi_square_independence(&counts)?;
            let row_percentages = counts.row_percentages();
            (
                SummaryTable::CrossTab {
                    counts,
                    row_percentages,
                },
                test,
            )
        }
    };

    let verdict = VerdictPolicy::from_config(config).decide(&test, &analysis.hypothesis);

    Ok(AnalysisReport {
        id: analysis.id.to_string(),
        title: analysis.title.to_string(),
        summary,
        test,
        verdict,
    })
}

/// Run the whole battery, isolating per-analysis failures.
///
/// Every entry yields an outcome: a report, or a skip with the failure
/// reason. One skipped analysis never aborts the rest.
pub fn run_battery(dataset: &Dataset, config: &Config) -> Vec<AnalysisOutcome> {
    battery()
        .iter()
        .map(|analysis| match run_analysis(analysis, dataset, config) {
            Ok(report) => AnalysisOutcome::Completed(report),
            Err(err) => AnalysisOutcome::Skipped {
                id: analysis.id.to_string(),
                title: analysis.title.to_string(),
                reason: err.to_string(),
            },
        })
        .collect()
}
