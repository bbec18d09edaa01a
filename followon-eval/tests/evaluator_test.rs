//! Tests for the evaluator.

use followon_core::types::collections::FxHashMap;
use followon_core::types::{
    BandCutpoints, ConfidenceBand, Detection, DetectionMethod, GroundTruthTransition,
};
use followon_eval::{evaluate, EvalOptions, ReportStatus};

fn detection(award_id: &str, contract_id: &str, score: f64) -> Detection {
    Detection {
        award_id: award_id.into(),
        contract_id: contract_id.into(),
        score,
        band: BandCutpoints::default().band_for(score),
        factors: FxHashMap::default(),
        method: DetectionMethod::ExactIdMatch,
    }
}

fn truth(pairs: &[(&str, &str)]) -> Vec<GroundTruthTransition> {
    pairs
        .iter()
        .map(|(a, c)| GroundTruthTransition::new(*a, *c))
        .collect()
}

#[test]
fn test_mixed_detections_against_truth() {
    // Known transitions (A1,C1) and (A2,C2); detector found (A1,C1) and a
    // spurious (A3,C3).
    let detections = vec![detection("A1", "C1", 0.9), detection("A3", "C3", 0.95)];
    let ground_truth = truth(&[("A1", "C1"), ("A2", "C2")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.8));
    assert_eq!(result.confusion.tp, 1);
    assert_eq!(result.confusion.fp, 1);
    assert_eq!(result.confusion.fn_, 1);
    assert_eq!(result.confusion.tn, 0);
    assert_eq!(result.precision, 0.5);
    assert_eq!(result.recall, 0.5);
}

#[test]
fn test_exact_match_yields_perfect_metrics() {
    let detections = vec![detection("A1", "C1", 0.9), detection("A2", "C2", 0.8)];
    let ground_truth = truth(&[("A1", "C1"), ("A2", "C2")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.6));
    assert_eq!(result.precision, 1.0);
    assert_eq!(result.recall, 1.0);
    assert_eq!(result.f1, 1.0);
    assert_eq!(result.confusion.fp, 0);
    assert_eq!(result.confusion.fn_, 0);
    assert_eq!(result.status, ReportStatus::Pass);
}

#[test]
fn test_disjoint_sets_yield_zero_metrics() {
    let detections = vec![detection("A1", "C1", 0.9)];
    let ground_truth = truth(&[("A2", "C2")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.6));
    assert_eq!(result.precision, 0.0);
    assert_eq!(result.recall, 0.0);
    assert_eq!(result.f1, 0.0);
    assert_eq!(result.status, ReportStatus::Failure);
}

#[test]
fn test_empty_inputs_are_all_zero_without_error() {
    let result = evaluate(&[], &[], &EvalOptions::default());
    assert_eq!(result.precision, 0.0);
    assert_eq!(result.recall, 0.0);
    assert_eq!(result.f1, 0.0);
    assert_eq!(result.detected_count, 0);
    assert_eq!(result.truth_count, 0);
    assert_eq!(result.status, ReportStatus::Pass);
}

#[test]
fn test_threshold_filters_detections() {
    let detections = vec![detection("A1", "C1", 0.9), detection("A2", "C2", 0.5)];
    let ground_truth = truth(&[("A1", "C1"), ("A2", "C2")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.8));
    assert_eq!(result.detected_count, 1);
    assert_eq!(result.confusion.fn_, 1);
}

#[test]
fn test_ids_are_trimmed_before_comparison() {
    let detections = vec![detection(" A1 ", "C1 ", 0.9)];
    let ground_truth = truth(&[("A1", "C1")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.6));
    assert_eq!(result.confusion.tp, 1);
}

#[test]
fn test_duplicate_pairs_collapse() {
    let detections = vec![
        detection("A1", "C1", 0.9),
        detection("A1", "C1", 0.72),
        detection("A1", "C1", 0.91),
    ];
    let ground_truth = truth(&[("A1", "C1"), ("A1", "C1")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.6));
    assert_eq!(result.detected_count, 1);
    assert_eq!(result.truth_count, 1);
    assert_eq!(result.confusion.tp, 1);
}

#[test]
fn test_label_filter_keeps_only_truthy_rows() {
    let detections = vec![detection("A1", "C1", 0.9)];
    let mut ground_truth = truth(&[("A1", "C1"), ("A2", "C2")]);
    ground_truth[0].label = Some(true);
    ground_truth[1].label = Some(false);

    let opts = EvalOptions {
        score_threshold: 0.6,
        use_label_filter: true,
    };
    let result = evaluate(&detections, &ground_truth, &opts);
    assert_eq!(result.truth_count, 1);
    assert_eq!(result.recall, 1.0);
}

#[test]
fn test_band_breakdown_counts_per_band() {
    let detections = vec![
        detection("A1", "C1", 0.9),  // high, tp
        detection("A2", "C2", 0.75), // likely, fp
        detection("A3", "C3", 0.65), // possible, tp
    ];
    let ground_truth = truth(&[("A1", "C1"), ("A3", "C3")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.6));
    let by_band = |band: ConfidenceBand| {
        result
            .band_breakdown
            .iter()
            .find(|row| row.band == band)
            .copied()
            .unwrap()
    };

    let high = by_band(ConfidenceBand::High);
    assert_eq!((high.detections, high.tp, high.fp), (1, 1, 0));
    assert_eq!(high.precision, 1.0);

    let likely = by_band(ConfidenceBand::Likely);
    assert_eq!((likely.detections, likely.tp, likely.fp), (1, 0, 1));
    assert_eq!(likely.precision, 0.0);

    let possible = by_band(ConfidenceBand::Possible);
    assert_eq!((possible.detections, possible.tp, possible.fp), (1, 1, 0));
}

#[test]
fn test_low_recall_produces_warning_with_recommendation() {
    let detections = vec![detection("A1", "C1", 0.9)];
    let ground_truth = truth(&[("A1", "C1"), ("A2", "C2"), ("A3", "C3")]);

    let result = evaluate(&detections, &ground_truth, &EvalOptions::at_threshold(0.6));
    assert_eq!(result.status, ReportStatus::Warning);
    assert!(result.report.contains("lowering the score threshold"));
}
