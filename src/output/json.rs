//! JSON serialization for analysis reports.

use crate::analysis::{AnalysisOutcome, AnalysisReport};

/// Serialize a single report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `AnalysisReport`).
pub fn to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a single report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `AnalysisReport`).
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Serialize a whole battery run to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn battery_to_json(outcomes: &[AnalysisOutcome]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_battery;
    use crate::config::Config;
    use crate::dataset::Dataset;

    const CSV: &str = "\
AI Training Received,Work Efficiency Score,Frequency of AI Use,Job Promotions or Salary Increase,Industry,Perceived Increase in Productivity (%),AI Tools Used,Purpose of AI Usage
Yes,78,Often,Yes,Tech,30,ChatGPT,Coding
Yes,74,Often,Yes,Finance,25,Copilot,Writing
Yes,76,Sometimes,No,Tech,22,ChatGPT,Coding
No,62,Rarely,No,Finance,12,Copilot,Writing
No,65,Never,No,Tech,10,ChatGPT,Coding
No,60,Rarely,Yes,Finance,8,Copilot,Writing
";

    #[test]
    fn battery_round_trips_through_json() {
        let ds = Dataset::from_csv_reader(CSV.as_bytes()).unwrap();
        let outcomes = run_battery(&ds, &Config::default());
        let json = battery_to_json(&outcomes).expect("should serialize");
        assert!(json.contains("training_efficiency"));
        assert!(json.contains("p_value"));
    }
}
