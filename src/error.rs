//! Error taxonomy for the analysis engine.
//!
//! Three failure classes with distinct propagation rules:
//! - [`AnalysisError::DataUnavailable`] is fatal: no analysis can run
//!   without a parsed dataset.
//! - [`AnalysisError::ColumnNotFound`] is fatal only for the analysis that
//!   needs the column; independent analyses still run.
//! - [`AnalysisError::InsufficientData`] marks a skipped analysis whose
//!   groups are too small or degenerate for its test procedure.
//!
//! All failures are structural (bad or missing data), never transient, so
//! there is no retry machinery.

/// Error type for dataset loading and hypothesis-test preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Source file unreadable or unparseable. Halts the whole session.
    DataUnavailable(String),
    /// A required survey column is missing from the dataset.
    ColumnNotFound(String),
    /// A group or sample is too small or degenerate for the requested test.
    InsufficientData(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::DataUnavailable(msg) => write!(f, "dataset unavailable: {}", msg),
            AnalysisError::ColumnNotFound(name) => write!(f, "column not found: {}", name),
            AnalysisError::InsufficientData(msg) => write!(f, "insufficient data: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = AnalysisError::ColumnNotFound("Industry".to_string());
        assert_eq!(err.to_string(), "column not found: Industry");

        let err = AnalysisError::InsufficientData("group has 1 observation".to_string());
        assert!(err.to_string().contains("group has 1 observation"));
    }
}
