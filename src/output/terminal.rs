//! Terminal output formatting with colors.

use colored::Colorize;

use crate::analysis::{AnalysisOutcome, AnalysisReport, SummaryTable};
use crate::result::Auxiliary;

/// Format a full battery run for human-readable terminal output.
pub fn format_battery(outcomes: &[AnalysisOutcome]) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("survey-stats\n");
    output.push_str(&sep);
    output.push('\n');

    for outcome in outcomes {
        output.push('\n');
        match outcome {
            AnalysisOutcome::Completed(report) => output.push_str(&format_report(report)),
            AnalysisOutcome::Skipped { title, reason, .. } => {
                output.push_str(&format!("{}\n", title.bold()));
                output.push_str(&format!(
                    "  {} {}\n",
                    "[SKIPPED]".yellow().bold(),
                    reason
                ));
            }
        }
        output.push_str(&sep);
        output.push('\n');
    }

    output
}

/// Format one analysis report: summary table, test figures, verdict.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", report.title.bold()));
    output.push_str(&format!("  Test: {}\n\n", report.test.method.name()));

    match &report.summary {
        SummaryTable::Groups(rows) => {
            output.push_str(&format!(
                "  {:<24} {:>6} {:>10} {:>10}\n",
                "Group", "Count", "Mean", "Std Dev"
            ));
            for row in rows {
                output.push_str(&format!(
                    "  {:<24} {:>6} {:>10.2} {:>10.2}\n",
                    row.group, row.n, row.mean, row.std_dev
                ));
            }
        }
        SummaryTable::CrossTab { counts, .. } => {
            output.push_str(&format!("  {:<24}", ""));
            for col in counts.col_labels() {
                output.push_str(&format!(" {:>12}", col));
            }
            output.push('\n');
            for (label, row) in counts.row_labels().iter().zip(counts.counts()) {
                output.push_str(&format!("  {:<24}", label));
                for &c in row {
                    output.push_str(&format!(" {:>12}", c));
                }
                output.push('\n');
            }
        }
    }
    output.push('\n');

    output.push_str(&format!(
        "  {}: {:.4}\n",
        report.test.method.statistic_label(),
        report.test.statistic
    ));
    if let Some(df) = report.test.degrees_of_freedom() {
        output.push_str(&format!("  Degrees of freedom: {:.2}\n", df));
    }
    output.push_str(&format!("  P-value: {:.4}\n\n", report.test.p_value));

    if let Auxiliary::ChiSquare {
        low_expected_counts: true,
        ..
    } = report.test.auxiliary
    {
        output.push_str(&format!(
            "  {}\n",
            "\u{26A0} Some expected counts are below 5; the chi-square approximation may be unreliable"
                .yellow()
        ));
    }

    if report.verdict.significant {
        output.push_str(&format!(
            "  {} (p = {:.4} < \u{03B1} = {})\n",
            "\u{2713} Reject null hypothesis".green().bold(),
            report.verdict.p_value,
            report.verdict.alpha
        ));
    } else {
        output.push_str(&format!(
            "  {} (p = {:.4} \u{2265} \u{03B1} = {})\n",
            "\u{26A0} Fail to reject null hypothesis".yellow().bold(),
            report.verdict.p_value,
            report.verdict.alpha
        ));
    }
    output.push_str(&format!("  {}\n", report.verdict.message));

    output
}
