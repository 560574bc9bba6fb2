//! Presentation-ready summary tables.

use serde::{Deserialize, Serialize};

use crate::stats::descriptive::{mean, sample_std};

/// Descriptive statistics for one group of a numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group name (the grouping column's value).
    pub group: String,
    /// Observations after dropping missing values.
    pub n: usize,
    /// Arithmetic mean, NaN for an empty group.
    pub mean: f64,
    /// Sample standard deviation, NaN below 2 observations.
    pub std_dev: f64,
}

/// Summarize named samples into mean/σ/count rows, in group order.
pub fn summarize_groups(groups: &[(String, Vec<f64>)]) -> Vec<GroupSummary> {
    groups
        .iter()
        .map(|(name, sample)| GroupSummary {
            group: name.clone(),
            n: sample.len(),
            mean: if sample.is_empty() {
                f64::NAN
            } else {
                mean(sample)
            },
            std_dev: if sample.len() < 2 {
                f64::NAN
            } else {
                sample_std(sample)
            },
        })
        .collect()
}
