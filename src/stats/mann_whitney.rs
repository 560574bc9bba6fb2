//! Mann-Whitney U test with the average-rank tie convention.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::AnalysisError;
use crate::result::{Auxiliary, TestMethod, TestResult};
use crate::stats::descriptive::filter_finite;

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alternative {
    /// The two distributions differ in either direction.
    TwoSided,
    /// The first sample is stochastically smaller.
    Less,
    /// The first sample is stochastically greater.
    Greater,
}

/// Rank-based test comparing two independent samples.
///
/// Pooled observations receive average ranks across ties, the variance of
/// U carries the standard tie correction, and the p-value comes from the
/// normal approximation with continuity correction. The reported
/// statistic is U for the first sample.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] if either sample is empty
/// (after dropping non-finite values) or every pooled observation is
/// tied, which leaves the statistic undefined.
pub fn mann_whitney_u(
    a: &[f64],
    b: &[f64],
    alternative: Alternative,
) -> Result<TestResult, AnalysisError> {
    let a = filter_finite(a);
    let b = filter_finite(b);
    if a.is_empty() || b.is_empty() {
        return Err(AnalysisError::InsufficientData(format!(
            "Mann-Whitney U requires non-empty samples (got {} and {})",
            a.len(),
            b.len()
        )));
    }

    let n_a = a.len() as f64;
    let n_b = b.len() as f64;
    let n = n_a + n_b;

    // Pool and sort; true marks membership in the first sample.
    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|&x| (x, true))
        .chain(b.iter().map(|&x| (x, false)))
        .collect();
    pooled.sort_by(|x, y| x.0.total_cmp(&y.0));

    // Average ranks over tie runs, accumulating Σ(t³ − t) as we go.
    let mut rank_sum_a = 0.0;
    let mut tie_term = 0.0;
    let mut i = 0;
    while i < pooled.len() {
        let mut j = i + 1;
        while j < pooled.len() && pooled[j].0 == pooled[i].0 {
            j += 1;
        }
        let run = (j - i) as f64;
        // Ranks are 1-based: positions i+1 ..= j share the average.
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for item in &pooled[i..j] {
            if item.1 {
                rank_sum_a += avg_rank;
            }
        }
        tie_term += run * run * run - run;
        i = j;
    }

    let u_a = rank_sum_a - n_a * (n_a + 1.0) / 2.0;
    let mean_u = n_a * n_b / 2.0;
    let var_u = n_a * n_b / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if var_u <= 0.0 {
        return Err(AnalysisError::InsufficientData(
            "Mann-Whitney U is undefined when all pooled observations are tied".to_string(),
        ));
    }
    let sd = var_u.sqrt();

    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        AnalysisError::InsufficientData(format!("normal approximation unavailable: {}", e))
    })?;

    // Continuity correction of 0.5 toward the null mean.
    let p_value = match alternative {
        Alternative::Greater => 1.0 - normal.cdf((u_a - mean_u - 0.5) / sd),
        Alternative::Less => normal.cdf((u_a - mean_u + 0.5) / sd),
        Alternative::TwoSided => {
            let z = ((u_a - mean_u).abs() - 0.5) / sd;
            (2.0 * (1.0 - normal.cdf(z))).min(1.0)
        }
    };

    Ok(TestResult {
        method: TestMethod::MannWhitneyU,
        statistic: u_a,
        p_value,
        auxiliary: Auxiliary::MannWhitney {
            n_a: a.len(),
            n_b: b.len(),
            alternative,
        },
    })
}
