//! Shared descriptive helpers for the test procedures.

/// Arithmetic mean.
///
/// # Panics
///
/// Panics if `xs` is empty.
pub fn mean(xs: &[f64]) -> f64 {
    assert!(!xs.is_empty(), "cannot compute mean of empty sample");
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Unbiased sample variance (n − 1 denominator).
///
/// # Panics
///
/// Panics if `xs` has fewer than 2 observations.
pub fn sample_variance(xs: &[f64]) -> f64 {
    assert!(
        xs.len() >= 2,
        "sample variance needs at least 2 observations"
    );
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64
}

/// Unbiased sample standard deviation.
///
/// # Panics
///
/// Panics if `xs` has fewer than 2 observations.
pub fn sample_std(xs: &[f64]) -> f64 {
    sample_variance(xs).sqrt()
}

/// Keep only finite values.
pub(crate) fn filter_finite(xs: &[f64]) -> Vec<f64> {
    xs.iter().copied().filter(|x| x.is_finite()).collect()
}
