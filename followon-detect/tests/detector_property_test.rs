//! Property tests for detector invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use followon_core::config::TransitionConfig;
use followon_core::types::{Award, Contract};
use followon_detect::detector::TransitionDetector;

fn epoch_day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn award_on(day: i64) -> Award {
    Award {
        award_id: "A1".into(),
        uei: Some("UEI0001".into()),
        vendor_name: Some("Acme Dynamics".into()),
        agency: Some("NASA".into()),
        award_date: Some(epoch_day(day)),
        ..Default::default()
    }
}

fn contract_on(day: i64) -> Contract {
    Contract {
        contract_id: "C1".into(),
        uei: Some("UEI0001".into()),
        vendor_name: Some("Acme Dynamics".into()),
        agency: Some("NASA".into()),
        action_date: Some(epoch_day(day)),
        ..Default::default()
    }
}

proptest! {
    /// No detection for a contract dated before the award reference date,
    /// beyond the configured backdating tolerance.
    #[test]
    fn prop_no_detection_outside_backdating_tolerance(
        award_day in 0i64..4000,
        contract_day in 0i64..4000,
        tolerance in 0i64..60,
    ) {
        let mut config = TransitionConfig::default();
        config.window.backdating_tolerance_days = tolerance;
        let detector = TransitionDetector::new(config);

        let award = award_on(award_day);
        let contract = contract_on(contract_day);
        let result = detector.detect_for_award(&award, &[&contract], &[], 0.1);

        let delta = contract_day - award_day;
        if delta < -tolerance {
            prop_assert!(result.detections.is_empty());
        }
    }

    /// For thresholds t1 < t2, detections at t2 are a subset of those at t1.
    #[test]
    fn prop_threshold_monotonicity(
        offsets in proptest::collection::vec(-200i64..1000, 1..20),
        t1 in 0.1f64..0.9,
        gap in 0.01f64..0.3,
    ) {
        let t2 = (t1 + gap).min(1.0);
        let detector = TransitionDetector::new(TransitionConfig::default());
        let award = award_on(0);
        let contracts: Vec<Contract> = offsets
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let mut c = contract_on(*day);
                c.contract_id = format!("C{}", i);
                c
            })
            .collect();
        let refs: Vec<&Contract> = contracts.iter().collect();

        let at_t1 = detector.detect_for_award(&award, &refs, &[], t1);
        let at_t2 = detector.detect_for_award(&award, &refs, &[], t2);

        let t1_ids: Vec<&str> = at_t1.detections.iter().map(|d| d.contract_id.as_str()).collect();
        for detection in &at_t2.detections {
            prop_assert!(t1_ids.contains(&detection.contract_id.as_str()));
        }
    }

    /// Scores are always within [0, 1] regardless of input spread.
    #[test]
    fn prop_scores_stay_in_unit_interval(
        offsets in proptest::collection::vec(0i64..700, 1..10),
    ) {
        let detector = TransitionDetector::new(TransitionConfig::default());
        let award = award_on(0);
        let contracts: Vec<Contract> = offsets
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let mut c = contract_on(*day);
                c.contract_id = format!("C{}", i);
                c
            })
            .collect();
        let refs: Vec<&Contract> = contracts.iter().collect();

        let result = detector.detect_for_award(&award, &refs, &[], 0.0_f64.max(f64::MIN_POSITIVE));
        for detection in &result.detections {
            prop_assert!((0.0..=1.0).contains(&detection.score));
        }
    }
}
