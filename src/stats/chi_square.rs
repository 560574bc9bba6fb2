//! Chi-square test of independence.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::constants::EXPECTED_COUNT_CAUTION;
use crate::error::AnalysisError;
use crate::result::{Auxiliary, TestMethod, TestResult};
use crate::stats::contingency::ContingencyTable;

/// Test whether the two categorical variables of a contingency table are
/// independent.
///
/// Expected counts derive from the row/column marginals; the Yates
/// continuity correction is applied on 2×2 tables. The auxiliary payload
/// carries the expected-count matrix and a caution flag that is set
/// whenever any expected count falls below 5 — the approximation is
/// unreliable there and callers should surface the caveat rather than
/// silently trust the p-value.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] if the table is smaller
/// than 2×2 or any marginal total is zero (degenerate table).
pub fn chi_square_independence(table: &ContingencyTable) -> Result<TestResult, AnalysisError> {
    if table.n_rows() < 2 || table.n_cols() < 2 {
        return Err(AnalysisError::InsufficientData(format!(
            "chi-square independence requires at least a 2x2 table (got {}x{})",
            table.n_rows(),
            table.n_cols()
        )));
    }

    let row_totals = table.row_totals();
    let col_totals = table.col_totals();
    let grand = table.total();
    if grand == 0 || row_totals.contains(&0) || col_totals.contains(&0) {
        return Err(AnalysisError::InsufficientData(
            "chi-square independence is degenerate with a zero marginal total".to_string(),
        ));
    }

    let yates = table.n_rows() == 2 && table.n_cols() == 2;
    let mut statistic = 0.0;
    let mut low_expected = false;
    let mut expected = Vec::with_capacity(table.n_rows());
    for (i, row) in table.counts().iter().enumerate() {
        let mut expected_row = Vec::with_capacity(table.n_cols());
        for (j, &observed) in row.iter().enumerate() {
            let e = row_totals[i] as f64 * col_totals[j] as f64 / grand as f64;
            if e < EXPECTED_COUNT_CAUTION {
                low_expected = true;
            }
            let mut diff = (observed as f64 - e).abs();
            if yates {
                diff = (diff - 0.5).max(0.0);
            }
            statistic += diff * diff / e;
            expected_row.push(e);
        }
        expected.push(expected_row);
    }

    let df = (table.n_rows() - 1) * (table.n_cols() - 1);
    let dist = ChiSquared::new(df as f64).map_err(|e| {
        AnalysisError::InsufficientData(format!("invalid degrees of freedom {}: {}", df, e))
    })?;
    let p_value = (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0);

    Ok(TestResult {
        method: TestMethod::ChiSquareIndependence,
        statistic,
        p_value,
        auxiliary: Auxiliary::ChiSquare {
            degrees_of_freedom: df,
            expected,
            low_expected_counts: low_expected,
            yates_correction: yates,
        },
    })
}
