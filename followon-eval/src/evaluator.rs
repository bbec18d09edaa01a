//! Confusion-matrix evaluation of detections against ground truth.

use tracing::debug;

use followon_core::types::collections::{FxHashMap, FxHashSet};
use followon_core::types::{ConfidenceBand, ConfusionMatrix, Detection, GroundTruthTransition};

use crate::report;
use crate::types::{BandBreakdown, EvalOptions, EvaluationResult};

/// Evaluate a detection run against curated ground truth.
///
/// tp = detected ∩ truth, fp = detected − truth, fn = truth − detected,
/// tn = 0 (open candidate universe). IDs are trimmed before comparison and
/// duplicate pairs collapse on both sides.
pub fn evaluate(
    detections: &[Detection],
    ground_truth: &[GroundTruthTransition],
    opts: &EvalOptions,
) -> EvaluationResult {
    // Detected pairs at threshold; duplicates keep their strongest band.
    let mut detected: FxHashMap<(String, String), ConfidenceBand> = FxHashMap::default();
    for detection in detections {
        if detection.score < opts.score_threshold {
            continue;
        }
        let key = pair_key(&detection.award_id, &detection.contract_id);
        let band = detected.entry(key).or_insert(detection.band);
        if band_rank(detection.band) > band_rank(*band) {
            *band = detection.band;
        }
    }

    let truth: FxHashSet<(String, String)> = ground_truth
        .iter()
        .filter(|row| !opts.use_label_filter || row.label == Some(true))
        .map(|row| pair_key(&row.award_id, &row.contract_id))
        .collect();

    let mut tp = 0u64;
    for key in detected.keys() {
        if truth.contains(key) {
            tp += 1;
        }
    }
    let fp = detected.len() as u64 - tp;
    let mut fn_ = 0u64;
    for key in &truth {
        if !detected.contains_key(key) {
            fn_ += 1;
        }
    }
    let confusion = ConfusionMatrix::new(tp, fp, fn_);

    let band_breakdown = band_breakdown(&detected, &truth);

    let precision = confusion.precision();
    let recall = confusion.recall();
    let f1 = confusion.f1();
    let detected_count = detected.len() as u64;
    let truth_count = truth.len() as u64;

    let status = report::status_for(precision, recall, detected_count, truth_count);
    let narrative = report::narrative(
        &confusion,
        precision,
        recall,
        f1,
        &band_breakdown,
        status,
        truth_count,
    );
    debug!(
        tp,
        fp,
        false_negatives = fn_,
        precision,
        recall,
        "evaluation complete"
    );

    EvaluationResult {
        confusion,
        precision,
        recall,
        f1,
        detected_count,
        truth_count,
        band_breakdown,
        status,
        report: narrative,
    }
}

fn band_breakdown(
    detected: &FxHashMap<(String, String), ConfidenceBand>,
    truth: &FxHashSet<(String, String)>,
) -> Vec<BandBreakdown> {
    let mut rows = Vec::with_capacity(ConfidenceBand::ALL.len());
    for band in ConfidenceBand::ALL {
        let mut detections = 0u64;
        let mut tp = 0u64;
        for (key, pair_band) in detected {
            if *pair_band != band {
                continue;
            }
            detections += 1;
            if truth.contains(key) {
                tp += 1;
            }
        }
        let fp = detections - tp;
        let precision = if detections == 0 {
            0.0
        } else {
            tp as f64 / detections as f64
        };
        rows.push(BandBreakdown {
            band,
            detections,
            tp,
            fp,
            precision,
        });
    }
    rows
}

fn band_rank(band: ConfidenceBand) -> u8 {
    match band {
        ConfidenceBand::High => 2,
        ConfidenceBand::Likely => 1,
        ConfidenceBand::Possible => 0,
    }
}

fn pair_key(award_id: &str, contract_id: &str) -> (String, String) {
    (award_id.trim().to_string(), contract_id.trim().to_string())
}
