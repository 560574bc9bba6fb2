//! The fixed battery of survey analyses.
//!
//! Each analysis is data, not control flow: an id, a title, a grouping
//! scheme bound to named survey columns, and the hypothesis wording its
//! verdict will carry. The runner validates column presence generically
//! from [`Procedure::required_columns`], so adding an analysis means
//! adding an entry here, not editing the engine.

use crate::constants::FREQUENCY_LEVELS;
use crate::stats::Alternative;
use crate::verdict::Hypothesis;

/// Names of the survey columns the battery touches.
pub mod columns {
    /// Whether the respondent received AI training ("Yes"/"No").
    pub const AI_TRAINING: &str = "AI Training Received";
    /// Continuous work efficiency score.
    pub const WORK_EFFICIENCY: &str = "Work Efficiency Score";
    /// Ordinal usage frequency (Never … Very Often).
    pub const AI_FREQUENCY: &str = "Frequency of AI Use";
    /// Whether the respondent was promoted or got a raise ("Yes"/"No").
    pub const PROMOTION: &str = "Job Promotions or Salary Increase";
    /// Respondent's industry.
    pub const INDUSTRY: &str = "Industry";
    /// Perceived productivity increase, percent.
    pub const PRODUCTIVITY: &str = "Perceived Increase in Productivity (%)";
    /// Primary AI tool used.
    pub const AI_TOOLS: &str = "AI Tools Used";
    /// Primary purpose of AI usage.
    pub const PURPOSE: &str = "Purpose of AI Usage";
}

/// How one analysis prepares its samples and which test it runs.
#[derive(Debug, Clone)]
pub enum Procedure {
    /// Welch t-test on a numeric column split by a binary categorical one.
    WelchT {
        /// Binary grouping column.
        group_column: &'static str,
        /// Numeric value column.
        value_column: &'static str,
        /// The two group values, in (a, b) order for the signed statistic.
        groups: [&'static str; 2],
    },
    /// Mann-Whitney U on an ordinal-encoded column split by a binary one.
    MannWhitneyU {
        /// Ordinal column to encode.
        ordinal_column: &'static str,
        /// Ranked vocabulary, lowest to highest.
        levels: &'static [&'static str],
        /// Binary grouping column.
        group_column: &'static str,
        /// The two group values, in (a, b) order.
        groups: [&'static str; 2],
        /// Direction of the alternative hypothesis.
        alternative: Alternative,
    },
    /// One-way ANOVA on a numeric column across every observed category.
    OneWayAnova {
        /// Categorical grouping column.
        group_column: &'static str,
        /// Numeric value column.
        value_column: &'static str,
    },
    /// Chi-square independence between two categorical columns.
    ChiSquareIndependence {
        /// Row variable.
        row_column: &'static str,
        /// Column variable.
        col_column: &'static str,
    },
}

impl Procedure {
    /// Columns that must exist in the dataset for this procedure to run.
    pub fn required_columns(&self) -> Vec<&'static str> {
        match self {
            Procedure::WelchT {
                group_column,
                value_column,
                ..
            }
            | Procedure::OneWayAnova {
                group_column,
                value_column,
            } => vec![group_column, value_column],
            Procedure::MannWhitneyU {
                ordinal_column,
                group_column,
                ..
            } => vec![ordinal_column, group_column],
            Procedure::ChiSquareIndependence {
                row_column,
                col_column,
            } => vec![row_column, col_column],
        }
    }
}

/// One entry of the battery.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Stable identifier.
    pub id: &'static str,
    /// Human-readable question this analysis answers.
    pub title: &'static str,
    /// Grouping scheme and test procedure.
    pub procedure: Procedure,
    /// Conclusion wording for the verdict.
    pub hypothesis: Hypothesis,
}

/// The four survey analyses, in presentation order.
pub fn battery() -> Vec<Analysis> {
    vec![
        Analysis {
            id: "training_efficiency",
            title: "Does AI training significantly impact work efficiency scores?",
            procedure: Procedure::WelchT {
                group_column: columns::AI_TRAINING,
                value_column: columns::WORK_EFFICIENCY,
                groups: ["Yes", "No"],
            },
            hypothesis: Hypothesis::new(
                "AI training significantly impacts work efficiency scores.",
                "AI training does not significantly impact work efficiency scores.",
            ),
        },
        Analysis {
            id: "usage_promotion",
            title: "Does frequent AI usage lead to more job promotions or salary increases?",
            procedure: Procedure::MannWhitneyU {
                ordinal_column: columns::AI_FREQUENCY,
                levels: &FREQUENCY_LEVELS,
                group_column: columns::PROMOTION,
                groups: ["Yes", "No"],
                alternative: Alternative::Greater,
            },
            hypothesis: Hypothesis::new(
                "Frequent AI users significantly receive more job promotions or salary increases.",
                "No significant difference in job promotions or salary increases based on AI usage.",
            ),
        },
        Analysis {
            id: "industry_productivity",
            title: "Does industry type affect perceived productivity increase?",
            procedure: Procedure::OneWayAnova {
                group_column: columns::INDUSTRY,
                value_column: columns::PRODUCTIVITY,
            },
            hypothesis: Hypothesis::new(
                "Different industries significantly differ in perceived productivity increase.",
                "No significant difference in perceived productivity increase across industries.",
            ),
        },
        Analysis {
            id: "tools_purpose",
            title: "Does the choice of AI tools depend on the purpose of AI usage?",
            procedure: Procedure::ChiSquareIndependence {
                row_column: columns::AI_TOOLS,
                col_column: columns::PURPOSE,
            },
            hypothesis: Hypothesis::new(
                "There is a significant relationship between AI tools used and purpose of AI usage.",
                "No significant relationship found between AI tools used and purpose of AI usage.",
            ),
        },
    ]
}
