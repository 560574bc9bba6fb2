//! Hypothesis-test procedures.
//!
//! This module is the statistical core of the engine:
//!
//! 1. **Welch t-test** ([`welch_t_test`]): two-sample mean comparison
//!    without the equal-variance assumption
//! 2. **Mann-Whitney U** ([`mann_whitney_u`]): rank-based two-sample
//!    comparison with average-rank tie handling
//! 3. **One-way ANOVA** ([`one_way_anova`]): equal-variance F-test across
//!    group means
//! 4. **Chi-square independence** ([`chi_square_independence`]): association
//!    between two categorical variables via [`ContingencyTable`]
//!
//! Every procedure is a pure function from prepared samples to a
//! [`crate::TestResult`]; precondition failures surface as
//! [`crate::AnalysisError::InsufficientData`], never as panics or garbage
//! statistics.

mod anova;
mod chi_square;
mod contingency;
pub mod descriptive;
mod mann_whitney;
mod ttest;

pub use anova::one_way_anova;
pub use chi_square::chi_square_independence;
pub use contingency::ContingencyTable;
pub use mann_whitney::{mann_whitney_u, Alternative};
pub use ttest::welch_t_test;
