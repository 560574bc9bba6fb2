//! Hypothesis-test result types.

use serde::{Deserialize, Serialize};

use crate::stats::Alternative;

/// Which test procedure produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestMethod {
    /// Independent two-sample t-test without the equal-variance assumption.
    WelchT,
    /// Rank-based comparison of two independent samples.
    MannWhitneyU,
    /// Equal-variance F-test across two or more group means.
    OneWayAnova,
    /// Chi-square test of independence on a contingency table.
    ChiSquareIndependence,
}

impl TestMethod {
    /// Human-readable name of the procedure.
    pub fn name(&self) -> &'static str {
        match self {
            TestMethod::WelchT => "Welch's t-test",
            TestMethod::MannWhitneyU => "Mann-Whitney U test",
            TestMethod::OneWayAnova => "One-way ANOVA",
            TestMethod::ChiSquareIndependence => "Chi-square test of independence",
        }
    }

    /// Display label for the test statistic ("T-statistic", "F-statistic", …).
    pub fn statistic_label(&self) -> &'static str {
        match self {
            TestMethod::WelchT => "T-statistic",
            TestMethod::MannWhitneyU => "U-statistic",
            TestMethod::OneWayAnova => "F-statistic",
            TestMethod::ChiSquareIndependence => "Chi-square statistic",
        }
    }
}

/// Complete result of one hypothesis test.
///
/// Immutable once produced; the verdict layer reads it, never edits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// The procedure that ran.
    pub method: TestMethod,

    /// Signed test statistic (t, U, F, or chi-square).
    pub statistic: f64,

    /// Probability of data at least this extreme under the null.
    pub p_value: f64,

    /// Procedure-specific auxiliary figures.
    pub auxiliary: Auxiliary,
}

/// Auxiliary figures attached to a [`TestResult`], one shape per
/// procedure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Auxiliary {
    /// Welch t-test extras.
    WelchT {
        /// Welch–Satterthwaite degrees of freedom.
        degrees_of_freedom: f64,
        /// Observations in the first sample.
        n_a: usize,
        /// Observations in the second sample.
        n_b: usize,
    },
    /// Mann-Whitney U extras.
    MannWhitney {
        /// Observations in the first sample.
        n_a: usize,
        /// Observations in the second sample.
        n_b: usize,
        /// Direction of the alternative hypothesis.
        alternative: Alternative,
    },
    /// One-way ANOVA extras.
    Anova {
        /// Between-groups degrees of freedom (k − 1).
        df_between: f64,
        /// Within-groups (residual) degrees of freedom (N − k).
        df_within: f64,
        /// Observations per group, in group order.
        group_sizes: Vec<usize>,
    },
    /// Chi-square independence extras.
    ChiSquare {
        /// (rows − 1) × (cols − 1).
        degrees_of_freedom: usize,
        /// Expected counts under independence, row-major.
        expected: Vec<Vec<f64>>,
        /// True if any expected count falls below the caution threshold;
        /// the chi-square approximation is then unreliable and callers
        /// should surface the caveat instead of trusting the p-value.
        low_expected_counts: bool,
        /// True if the Yates continuity correction was applied (2×2 only).
        yates_correction: bool,
    },
}

impl TestResult {
    /// Degrees of freedom, where the procedure has a single defining one.
    ///
    /// ANOVA reports its residual degrees of freedom here; the
    /// between-groups figure is in [`Auxiliary::Anova`].
    pub fn degrees_of_freedom(&self) -> Option<f64> {
        match &self.auxiliary {
            Auxiliary::WelchT {
                degrees_of_freedom, ..
            } => Some(*degrees_of_freedom),
            Auxiliary::MannWhitney { .. } => None,
            Auxiliary::Anova { df_within, .. } => Some(*df_within),
            Auxiliary::ChiSquare {
                degrees_of_freedom, ..
            } => Some(*degrees_of_freedom as f64),
        }
    }
}
