//! Shared constants for the analysis battery.

/// Significance threshold applied by the default [`crate::VerdictPolicy`].
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Expected-count threshold below which the chi-square approximation is
/// considered unreliable and the result carries a caution flag.
pub const EXPECTED_COUNT_CAUTION: f64 = 5.0;

/// Ranked vocabulary of the "Frequency of AI Use" survey question,
/// lowest to highest.
pub const FREQUENCY_LEVELS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Very Often"];
