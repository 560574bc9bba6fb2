//! Significance verdicts.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::DEFAULT_ALPHA;
use crate::result::TestResult;

/// The two conclusion templates for one analysis.
///
/// The policy itself is test-agnostic; callers supply what "significant"
/// means for their hypothesis, worded as complete conclusions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Conclusion when the null hypothesis is rejected.
    pub reject: String,
    /// Conclusion when the test fails to reject the null hypothesis.
    pub fail_to_reject: String,
}

impl Hypothesis {
    /// Build a hypothesis from its two conclusion templates.
    pub fn new<R: Into<String>, F: Into<String>>(reject: R, fail_to_reject: F) -> Self {
        Self {
            reject: reject.into(),
            fail_to_reject: fail_to_reject.into(),
        }
    }
}

/// Categorical conclusion of one hypothesis test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// True if the null hypothesis was rejected at `alpha`.
    pub significant: bool,
    /// The threshold the p-value was compared against.
    pub alpha: f64,
    /// The p-value that was judged.
    pub p_value: f64,
    /// Natural-language conclusion, one of the two templates.
    pub message: String,
}

/// Applies a fixed significance threshold to test results.
///
/// Deterministic and monotonic: for a fixed `alpha`, every p-value below
/// it is significant and every p-value at or above it is not.
#[derive(Debug, Clone, Copy)]
pub struct VerdictPolicy {
    alpha: f64,
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl VerdictPolicy {
    /// Create a policy with a custom significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in the open interval (0, 1).
    pub fn new(alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "alpha must be in (0, 1), got {}",
            alpha
        );
        Self { alpha }
    }

    /// Policy using the configured significance level.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.alpha)
    }

    /// The significance level in force.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Judge a test result against the threshold.
    pub fn decide(&self, result: &TestResult, hypothesis: &Hypothesis) -> Verdict {
        let significant = result.p_value < self.alpha;
        let message = if significant {
            hypothesis.reject.clone()
        } else {
            hypothesis.fail_to_reject.clone()
        };
        Verdict {
            significant,
            alpha: self.alpha,
            p_value: result.p_value,
            message,
        }
    }
}
