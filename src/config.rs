//! Configuration for the analysis battery.

use crate::constants::DEFAULT_ALPHA;

/// Configuration options shared by every analysis in a battery run.
///
/// The significance threshold lives here and nowhere else; every verdict
/// in a run is decided against the same `alpha`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Significance level for verdicts (default: 0.05).
    ///
    /// A p-value strictly below `alpha` rejects the null hypothesis.
    pub alpha: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl Config {
    /// Create a configuration with a custom significance level.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in the open interval (0, 1).
    pub fn with_alpha(alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "alpha must be in (0, 1), got {}",
            alpha
        );
        Self { alpha }
    }
}
