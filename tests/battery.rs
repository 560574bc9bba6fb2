//! End-to-end battery tests over an in-memory survey.

use survey_stats::{
    output, run_battery, AnalysisOutcome, Config, Dataset, SummaryTable, TestMethod,
};

/// A small but complete survey slice: every battery column present,
/// trained respondents clearly ahead of untrained ones.
const SURVEY_CSV: &str = "\
AI Training Received,Work Efficiency Score,Frequency of AI Use,Job Promotions or Salary Increase,Industry,Perceived Increase in Productivity (%),AI Tools Used,Purpose of AI Usage
Yes,78,Very Often,Yes,Tech,34,ChatGPT,Coding
Yes,75,Often,Yes,Tech,29,ChatGPT,Coding
Yes,77,Very Often,Yes,Finance,31,Copilot,Coding
Yes,73,Often,Yes,Finance,26,ChatGPT,Writing
Yes,79,Often,No,Health,30,Copilot,Coding
Yes,74,Sometimes,Yes,Health,24,ChatGPT,Writing
Yes,76,Very Often,Yes,Tech,33,Copilot,Coding
No,61,Never,No,Tech,9,ChatGPT,Writing
No,64,Rarely,No,Finance,12,ChatGPT,Writing
No,59,Never,No,Finance,7,Copilot,Coding
No,63,Rarely,No,Health,11,ChatGPT,Writing
No,66,Sometimes,Yes,Health,14,Copilot,Coding
No,62,Rarely,No,Tech,10,ChatGPT,Writing
No,60,Never,No,Tech,8,ChatGPT,Writing
";

fn survey() -> Dataset {
    Dataset::from_csv_reader(SURVEY_CSV.as_bytes()).expect("fixture should parse")
}

/// All four analyses complete on a well-formed survey.
#[test]
fn full_battery_completes() {
    let outcomes = run_battery(&survey(), &Config::default());
    assert_eq!(outcomes.len(), 4);
    for outcome in &outcomes {
        assert!(outcome.is_completed(), "unexpected skip: {:?}", outcome);
    }
}

/// The battery runs the expected procedures in presentation order.
#[test]
fn battery_order_and_methods() {
    let outcomes = run_battery(&survey(), &Config::default());
    let methods: Vec<TestMethod> = outcomes
        .iter()
        .map(|o| o.report().unwrap().test.method)
        .collect();
    assert_eq!(
        methods,
        vec![
            TestMethod::WelchT,
            TestMethod::MannWhitneyU,
            TestMethod::OneWayAnova,
            TestMethod::ChiSquareIndependence,
        ]
    );
}

/// A clearly separated dataset produces significant verdicts for the
/// training and promotion analyses.
#[test]
fn separated_groups_are_significant() {
    let outcomes = run_battery(&survey(), &Config::default());

    let training = outcomes[0].report().unwrap();
    assert!(training.test.statistic > 0.0);
    assert!(training.verdict.significant);

    let promotion = outcomes[1].report().unwrap();
    assert!(
        promotion.verdict.significant,
        "promoted respondents use AI more: p = {}",
        promotion.test.p_value
    );
}

/// Summary tables carry the figures the presentation layer renders.
#[test]
fn reports_carry_summary_tables() {
    let outcomes = run_battery(&survey(), &Config::default());

    match &outcomes[0].report().unwrap().summary {
        SummaryTable::Groups(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].group, "Yes");
            assert_eq!(rows[0].n, 7);
            assert!(rows[0].mean > rows[1].mean);
        }
        other => panic!("expected group summary, got {:?}", other),
    }

    match &outcomes[3].report().unwrap().summary {
        SummaryTable::CrossTab {
            counts,
            row_percentages,
        } => {
            assert_eq!(counts.n_rows(), 2); // ChatGPT, Copilot
            for row in row_percentages {
                let sum: f64 = row.iter().sum();
                assert!((sum - 100.0).abs() < 1e-9);
            }
        }
        other => panic!("expected crosstab, got {:?}", other),
    }
}

/// Missing columns skip only the affected analysis; insufficient data in
/// one analysis never aborts the battery.
#[test]
fn failures_are_isolated_per_analysis() {
    let csv = "\
AI Training Received,Work Efficiency Score
Yes,70
Yes,72
Yes,68
No,60
No,61
";
    let ds = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
    let outcomes = run_battery(&ds, &Config::default());

    assert!(outcomes[0].is_completed());
    for outcome in &outcomes[1..] {
        match outcome {
            AnalysisOutcome::Skipped { reason, .. } => {
                assert!(reason.contains("column not found"), "reason: {}", reason);
            }
            other => panic!("expected skip, got {:?}", other),
        }
    }
}

/// Battery reports serialize to JSON and render to terminal text.
#[test]
fn outputs_are_renderable() {
    let outcomes = run_battery(&survey(), &Config::default());

    let json = output::battery_to_json(&outcomes).expect("should serialize");
    assert!(json.contains("training_efficiency"));
    assert!(json.contains("tools_purpose"));

    let text = output::format_battery(&outcomes);
    assert!(text.contains("P-value"));
    assert!(text.contains("Reject null hypothesis"));
}

/// A stricter alpha flips marginal verdicts without touching statistics.
#[test]
fn alpha_is_centralized() {
    let relaxed = run_battery(&survey(), &Config::default());
    let strict = run_battery(&survey(), &Config::with_alpha(1e-12));

    for (r, s) in relaxed.iter().zip(&strict) {
        let (r, s) = (r.report().unwrap(), s.report().unwrap());
        assert_eq!(r.test.p_value, s.test.p_value);
        assert!(!s.verdict.significant);
        assert!((s.verdict.alpha - 1e-12).abs() < 1e-24);
    }
}
