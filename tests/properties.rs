//! Statistical properties of the test procedures.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use survey_stats::stats::{
    chi_square_independence, mann_whitney_u, one_way_anova, welch_t_test, Alternative,
    ContingencyTable,
};
use survey_stats::{AnalysisError, Auxiliary, Hypothesis, Value, VerdictPolicy};
use survey_stats::prepare::OrdinalScale;

/// Welch's t is antisymmetric in its arguments with an unchanged p-value.
#[test]
fn welch_symmetry() {
    let partitions = [
        (vec![1.0, 2.0, 3.0, 4.0], vec![2.5, 3.5, 4.5]),
        (vec![70.0, 72.0, 68.0, 75.0, 74.0], vec![60.0, 58.0, 62.0, 61.0]),
        (vec![0.1, 0.2, 0.15, 0.3], vec![0.12, 0.22, 0.18]),
    ];
    for (a, b) in &partitions {
        let ab = welch_t_test(a, b).unwrap();
        let ba = welch_t_test(b, a).unwrap();
        assert!((ab.statistic + ba.statistic).abs() < 1e-10);
        assert!((ab.p_value - ba.p_value).abs() < 1e-10);
    }
}

/// Trained-vs-untrained efficiency scores: positive t, significant at 0.05.
#[test]
fn welch_concrete_scenario() {
    let trained = [70.0, 72.0, 68.0, 75.0, 74.0];
    let untrained = [60.0, 58.0, 62.0, 61.0];
    let result = welch_t_test(&trained, &untrained).unwrap();

    assert!(result.statistic > 0.0, "mean(A) > mean(B) gives positive t");
    assert!(result.statistic > 7.0 && result.statistic < 8.0);
    assert!(result.p_value < 0.001);

    let policy = VerdictPolicy::default();
    let verdict = policy.decide(
        &result,
        &Hypothesis::new("training matters", "training does not matter"),
    );
    assert_eq!(verdict.significant, result.p_value < 0.05);
    assert!(verdict.significant);
}

/// A single-observation group must fail cleanly, not produce garbage.
#[test]
fn welch_single_observation_boundary() {
    let err = welch_t_test(&[70.0], &[60.0, 61.0, 62.0]).unwrap_err();
    assert!(matches!(err, AnalysisError::InsufficientData(_)));
}

/// Verdicts are monotonic in the p-value for a fixed alpha.
#[test]
fn verdict_monotonicity() {
    let policy = VerdictPolicy::default();
    let hypothesis = Hypothesis::new("reject", "fail");
    let mut last_significant = false;
    // Sweep p downward; significance may switch on but never off.
    for exp in 0..16 {
        let p = 0.5_f64 * 10_f64.powi(-exp);
        let result = welch_t_test(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]).unwrap();
        let result = survey_stats::TestResult { p_value: p, ..result };
        let verdict = policy.decide(&result, &hypothesis);
        assert_eq!(verdict.significant, p < 0.05);
        assert!(verdict.significant || !last_significant);
        last_significant = verdict.significant;
    }
}

/// Comparing a sample against itself must not report significance.
#[test]
fn mann_whitney_self_comparison() {
    let sample = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 7.0];
    let result = mann_whitney_u(&sample, &sample, Alternative::Greater).unwrap();
    assert!(
        result.p_value > 0.45,
        "self-comparison p = {} should be near the null center",
        result.p_value
    );
}

/// Encoding then averaging ranks reproduces the vocabulary order when
/// groups are drawn from consecutive vocabulary buckets.
#[test]
fn ordinal_round_trip_preserves_order() {
    let scale = OrdinalScale::new(&["Never", "Rarely", "Sometimes", "Often", "Very Often"]);
    let buckets: [&[&str]; 3] = [
        &["Never", "Rarely", "Never"],
        &["Sometimes", "Rarely", "Sometimes", "Often"],
        &["Often", "Very Often", "Very Often"],
    ];

    let mut means = Vec::new();
    for bucket in &buckets {
        let sample: Vec<Value> = bucket.iter().map(|s| Value::Str(s.to_string())).collect();
        let ranks = scale.encode(&sample);
        assert_eq!(ranks.len(), bucket.len());
        means.push(ranks.iter().sum::<f64>() / ranks.len() as f64);
    }
    assert!(means[0] < means[1] && means[1] < means[2]);
}

/// ANOVA on groups drawn around one common mean stays insignificant;
/// strongly separated groups do not.
#[test]
fn anova_distinguishes_separation() {
    let same = vec![
        vec![10.0, 11.0, 9.0, 10.5],
        vec![10.2, 9.8, 10.9, 9.4],
        vec![9.9, 10.4, 10.1, 9.7],
    ];
    let apart = vec![
        vec![10.0, 11.0, 9.0, 10.5],
        vec![20.2, 19.8, 20.9, 19.4],
        vec![29.9, 30.4, 30.1, 29.7],
    ];
    assert!(one_way_anova(&same).unwrap().p_value > 0.05);
    assert!(one_way_anova(&apart).unwrap().p_value < 0.001);
}

/// The dominant-diagonal table from the survey scenario: large statistic,
/// p near 0, and no low-expected-count caution.
#[test]
fn chi_square_dominant_diagonal() {
    let pairs = [
        ("ToolX", "Purpose1", 50),
        ("ToolX", "Purpose2", 5),
        ("ToolY", "Purpose1", 5),
        ("ToolY", "Purpose2", 50),
    ];
    let table = ContingencyTable::from_pairs(pairs.iter().flat_map(|&(r, c, n)| {
        std::iter::repeat((r.to_string(), c.to_string())).take(n)
    }));
    let result = chi_square_independence(&table).unwrap();

    assert!(result.statistic > 50.0);
    assert!(result.p_value < 1e-9);
    match result.auxiliary {
        Auxiliary::ChiSquare {
            low_expected_counts,
            ..
        } => assert!(!low_expected_counts),
        _ => panic!("wrong auxiliary variant"),
    }
}

/// On independent random categorical draws the chi-square p-value should
/// spread across (0, 1) rather than piling up near either end.
#[test]
fn chi_square_p_values_spread_under_independence() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
    let categories = ["A", "B", "C"];
    let purposes = ["X", "Y", "Z"];

    let mut p_values = Vec::new();
    for _ in 0..200 {
        let pairs = (0..270).map(|_| {
            (
                categories[rng.gen_range(0..3)].to_string(),
                purposes[rng.gen_range(0..3)].to_string(),
            )
        });
        let table = ContingencyTable::from_pairs(pairs);
        let result = chi_square_independence(&table).unwrap();
        p_values.push(result.p_value);
    }

    let n = p_values.len() as f64;
    let mean = p_values.iter().sum::<f64>() / n;
    let below_alpha = p_values.iter().filter(|&&p| p < 0.05).count() as f64 / n;

    // Under the null, p is uniform: mean near 0.5, ~5% below 0.05.
    assert!(mean > 0.35 && mean < 0.65, "mean p = {}", mean);
    assert!(below_alpha < 0.12, "false positive rate = {}", below_alpha);
    assert!(p_values.iter().any(|&p| p < 0.5));
    assert!(p_values.iter().any(|&p| p > 0.5));
}
