//! One-way analysis of variance.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::AnalysisError;
use crate::result::{Auxiliary, TestMethod, TestResult};
use crate::stats::descriptive::{filter_finite, mean};

/// Equal-variance one-way ANOVA across two or more independent samples.
///
/// Tests the hypothesis that all group means are equal via the ratio of
/// between-group to within-group mean squares. Groups with unequal
/// variances are not specially corrected here; callers requiring a
/// variance-robust comparison must transform their samples first.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] if fewer than 2 groups are
/// given, any group is empty after dropping non-finite values, residual
/// degrees of freedom run out, or all observations are identical within
/// their groups (zero residual variance).
pub fn one_way_anova(groups: &[Vec<f64>]) -> Result<TestResult, AnalysisError> {
    if groups.len() < 2 {
        return Err(AnalysisError::InsufficientData(format!(
            "one-way ANOVA requires at least 2 groups (got {})",
            groups.len()
        )));
    }

    let filtered: Vec<Vec<f64>> = groups.iter().map(|g| filter_finite(g)).collect();
    for (i, g) in filtered.iter().enumerate() {
        if g.is_empty() {
            return Err(AnalysisError::InsufficientData(format!(
                "one-way ANOVA group {} has no observations",
                i
            )));
        }
    }

    let k = filtered.len() as f64;
    let n: f64 = filtered.iter().map(|g| g.len() as f64).sum();
    let df_between = k - 1.0;
    let df_within = n - k;
    if df_within < 1.0 {
        return Err(AnalysisError::InsufficientData(format!(
            "one-way ANOVA needs residual degrees of freedom (N={}, k={})",
            n, k
        )));
    }

    let grand_mean = filtered.iter().flatten().sum::<f64>() / n;
    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for g in &filtered {
        let m = mean(g);
        ss_between += g.len() as f64 * (m - grand_mean) * (m - grand_mean);
        ss_within += g.iter().map(|x| (x - m) * (x - m)).sum::<f64>();
    }

    let ms_within = ss_within / df_within;
    if ms_within == 0.0 {
        return Err(AnalysisError::InsufficientData(
            "one-way ANOVA is degenerate with zero within-group variance".to_string(),
        ));
    }
    let f = (ss_between / df_between) / ms_within;

    let dist = FisherSnedecor::new(df_between, df_within).map_err(|e| {
        AnalysisError::InsufficientData(format!(
            "invalid degrees of freedom ({}, {}): {}",
            df_between, df_within, e
        ))
    })?;
    let p_value = (1.0 - dist.cdf(f)).clamp(0.0, 1.0);

    Ok(TestResult {
        method: TestMethod::OneWayAnova,
        statistic: f,
        p_value,
        auxiliary: Auxiliary::Anova {
            df_between,
            df_within,
            group_sizes: filtered.iter().map(Vec::len).collect(),
        },
    })
}
