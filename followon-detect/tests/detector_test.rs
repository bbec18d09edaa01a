//! Tests for the transition detector.

use chrono::NaiveDate;

use followon_core::config::TransitionConfig;
use followon_core::types::{Award, ConfidenceBand, Contract, DetectionMethod};
use followon_detect::detector::TransitionDetector;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn award(id: &str, agency: &str, date_: NaiveDate) -> Award {
    Award {
        award_id: id.into(),
        uei: Some("UEI0001".into()),
        vendor_name: Some("Acme Propulsion, Inc.".into()),
        agency: Some(agency.into()),
        award_date: Some(date_),
        ..Default::default()
    }
}

fn contract(id: &str, agency: &str, date_: NaiveDate) -> Contract {
    Contract {
        contract_id: id.into(),
        uei: Some("UEI0001".into()),
        vendor_name: Some("Acme Propulsion, Inc.".into()),
        agency: Some(agency.into()),
        action_date: Some(date_),
        ..Default::default()
    }
}

fn detector() -> TransitionDetector {
    TransitionDetector::new(TransitionConfig::default())
}

#[test]
fn test_same_agency_immediate_followon_is_detected() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let c = contract("C1", "NASA", date(2022, 1, 31));
    let result = detector().detect_for_award(&a, &[&c], &[], 0.6);

    assert_eq!(result.detections.len(), 1);
    let detection = &result.detections[0];
    assert_eq!(detection.award_id, "A1");
    assert_eq!(detection.contract_id, "C1");
    assert!(detection.score > 0.6);
    assert_eq!(detection.method, DetectionMethod::ExactIdMatch);
}

#[test]
fn test_contract_before_award_is_rejected() {
    let a = award("A1", "NASA", date(2022, 6, 1));
    let c = contract("C1", "NASA", date(2022, 5, 1));
    let result = detector().detect_for_award(&a, &[&c], &[], 0.1);
    assert!(result.detections.is_empty());
}

#[test]
fn test_backdating_tolerance_admits_slightly_early_contract() {
    let mut config = TransitionConfig::default();
    config.window.backdating_tolerance_days = 45;
    let det = TransitionDetector::new(config);

    let a = award("A1", "NASA", date(2022, 6, 1));
    let c = contract("C1", "NASA", date(2022, 5, 1));
    let result = det.detect_for_award(&a, &[&c], &[], 0.1);
    assert_eq!(result.detections.len(), 1);
}

#[test]
fn test_contract_beyond_lookback_window_is_rejected() {
    let a = award("A1", "NASA", date(2020, 1, 1));
    let c = contract("C1", "NASA", date(2023, 6, 1));
    let result = detector().detect_for_award(&a, &[&c], &[], 0.1);
    assert!(result.detections.is_empty());
    // Rejected before scoring
    assert_eq!(result.candidates_scored, 0);
}

#[test]
fn test_vendor_mismatch_is_rejected_before_scoring() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let mut c = contract("C1", "NASA", date(2022, 2, 1));
    c.uei = Some("OTHER99".into());
    c.vendor_name = Some("Zenith Photonics".into());
    let result = detector().detect_for_award(&a, &[&c], &[], 0.1);
    assert!(result.detections.is_empty());
    assert_eq!(result.candidates_scored, 0);
}

#[test]
fn test_fuzzy_name_match_is_tagged() {
    let mut a = award("A1", "NASA", date(2022, 1, 1));
    a.uei = None;
    let mut c = contract("C1", "NASA", date(2022, 2, 1));
    c.uei = None;
    c.vendor_name = Some("ACME PROPULSION LLC".into());

    let result = detector().detect_for_award(&a, &[&c], &[], 0.5);
    assert_eq!(result.detections.len(), 1);
    assert_eq!(result.detections[0].method, DetectionMethod::FuzzyNameMatch);
}

#[test]
fn test_one_award_may_yield_several_detections() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let c1 = contract("C1", "NASA", date(2022, 2, 1));
    let c2 = contract("C2", "NASA", date(2022, 7, 1));
    let result = detector().detect_for_award(&a, &[&c1, &c2], &[], 0.5);
    assert_eq!(result.detections.len(), 2);
}

#[test]
fn test_exact_pair_duplicates_are_merged() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let c = contract("C1", "NASA", date(2022, 2, 1));
    let result = detector().detect_for_award(&a, &[&c, &c], &[], 0.5);
    assert_eq!(result.detections.len(), 1);
}

#[test]
fn test_detections_sorted_by_score_then_timing() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    // Same score bucket inputs except timing: C2 lands later within the
    // same bucket; identical scores break toward the closer contract.
    let c1 = contract("C1", "NASA", date(2022, 3, 1));
    let c2 = contract("C2", "NASA", date(2022, 1, 15));
    let result = detector().detect_for_award(&a, &[&c1, &c2], &[], 0.5);

    assert_eq!(result.detections.len(), 2);
    assert_eq!(result.detections[0].contract_id, "C2");
    assert_eq!(result.detections[1].contract_id, "C1");
}

#[test]
fn test_malformed_contract_is_skipped_not_fatal() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let mut bad = contract("C1", "NASA", date(2022, 2, 1));
    bad.action_date = None;
    let good = contract("C2", "NASA", date(2022, 2, 1));

    let result = detector().detect_for_award(&a, &[&bad, &good], &[], 0.5);
    assert_eq!(result.detections.len(), 1);
    assert_eq!(result.detections[0].contract_id, "C2");
    assert_eq!(result.malformed_skipped, 1);
}

#[test]
fn test_award_without_dates_is_skipped() {
    let mut a = award("A1", "NASA", date(2022, 1, 1));
    a.award_date = None;
    a.completion_date = None;
    let c = contract("C1", "NASA", date(2022, 2, 1));

    let result = detector().detect_for_award(&a, &[&c], &[], 0.5);
    assert!(result.detections.is_empty());
    assert_eq!(result.malformed_skipped, 1);
}

#[test]
fn test_band_assignment_uses_central_cutpoints() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let mut c = contract("C1", "NASA", date(2022, 1, 31));
    c.competition_type = Some("Sole Source".into());
    // base 0.30 + same agency 0.25 + timing 0.20 + sole source 0.15 = 0.90
    let result = detector().detect_for_award(&a, &[&c], &[], 0.6);
    assert_eq!(result.detections.len(), 1);
    assert_eq!(result.detections[0].band, ConfidenceBand::High);

    let plain = contract("C2", "NASA", date(2022, 1, 31));
    let result = detector().detect_for_award(&a, &[&plain], &[], 0.6);
    // base 0.30 + same agency 0.25 + timing 0.20 = 0.75
    assert_eq!(result.detections[0].band, ConfidenceBand::Likely);
}

#[test]
fn test_threshold_monotonicity_on_fixed_candidates() {
    let a = award("A1", "NASA", date(2022, 1, 1));
    let mut candidates = Vec::new();
    for (i, days) in [15u32, 45, 200, 400].iter().enumerate() {
        let d = date(2022, 1, 1) + chrono::Duration::days(*days as i64);
        let mut c = contract(&format!("C{}", i), "NASA", d);
        if i % 2 == 0 {
            c.agency = Some("NAVY".into());
        }
        candidates.push(c);
    }
    let refs: Vec<&Contract> = candidates.iter().collect();
    let det = detector();

    let low = det.detect_for_award(&a, &refs, &[], 0.4);
    let high = det.detect_for_award(&a, &refs, &[], 0.7);

    let low_ids: Vec<&str> = low.detections.iter().map(|d| d.contract_id.as_str()).collect();
    for d in &high.detections {
        assert!(low_ids.contains(&d.contract_id.as_str()));
    }
    assert!(high.detections.len() <= low.detections.len());
}
