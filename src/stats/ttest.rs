//! Welch's two-sample t-test.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::AnalysisError;
use crate::result::{Auxiliary, TestMethod, TestResult};
use crate::stats::descriptive::{filter_finite, mean, sample_variance};

/// Independent two-sample t-test without the equal-variance assumption.
///
/// The statistic is signed: positive when `a`'s mean exceeds `b`'s.
/// Degrees of freedom follow the Welch–Satterthwaite approximation and
/// the p-value is two-sided. Swapping the samples negates the statistic
/// and leaves the p-value unchanged.
///
/// Non-finite values are dropped before any check.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] if either sample has fewer
/// than 2 observations or zero variance.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<TestResult, AnalysisError> {
    let a = filter_finite(a);
    let b = filter_finite(b);

    if a.len() < 2 || b.len() < 2 {
        return Err(AnalysisError::InsufficientData(format!(
            "Welch's t-test requires at least 2 observations per group (got {} and {})",
            a.len(),
            b.len()
        )));
    }

    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let (var_a, var_b) = (sample_variance(&a), sample_variance(&b));
    if var_a == 0.0 || var_b == 0.0 {
        return Err(AnalysisError::InsufficientData(
            "Welch's t-test requires non-zero variance in both groups".to_string(),
        ));
    }

    let se_a = var_a / n_a;
    let se_b = var_b / n_b;
    let t = (mean(&a) - mean(&b)) / (se_a + se_b).sqrt();

    // Welch–Satterthwaite degrees of freedom.
    let df = (se_a + se_b).powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));

    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        AnalysisError::InsufficientData(format!("invalid degrees of freedom {}: {}", df, e))
    })?;
    let p_value = (2.0 * (1.0 - dist.cdf(t.abs()))).min(1.0);

    Ok(TestResult {
        method: TestMethod::WelchT,
        statistic: t,
        p_value,
        auxiliary: Auxiliary::WelchT {
            degrees_of_freedom: df,
            n_a: a.len(),
            n_b: b.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_samples_are_significant() {
        let a = [10.0, 11.0, 12.0, 13.0, 14.0];
        let b = [20.0, 21.0, 22.0, 23.0, 24.0];
        let result = welch_t_test(&a, &b).unwrap();
        assert!(result.statistic < -5.0);
        assert!(result.p_value < 0.01);
    }

    #[test]
    fn symmetry_negates_statistic() {
        let a = [70.0, 72.0, 68.0, 75.0, 74.0];
        let b = [60.0, 58.0, 62.0, 61.0];
        let ab = welch_t_test(&a, &b).unwrap();
        let ba = welch_t_test(&b, &a).unwrap();
        assert!((ab.statistic + ba.statistic).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    }

    #[test]
    fn single_observation_is_insufficient() {
        let err = welch_t_test(&[10.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData(_)));
    }

    #[test]
    fn zero_variance_is_insufficient() {
        let err = welch_t_test(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData(_)));
    }

    #[test]
    fn nan_values_are_dropped_not_propagated() {
        let a = [10.0, f64::NAN, 12.0, 13.0];
        let b = [20.0, 21.0, 22.0];
        let result = welch_t_test(&a, &b).unwrap();
        assert!(result.statistic.is_finite());
        if let Auxiliary::WelchT { n_a, .. } = result.auxiliary {
            assert_eq!(n_a, 3);
        } else {
            panic!("wrong auxiliary variant");
        }
    }
}
