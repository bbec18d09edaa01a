//! Ground truth and confusion-matrix types.

use serde::{Deserialize, Serialize};

/// A known award → contract transition, curated externally.
///
/// Used only for evaluation, never for detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundTruthTransition {
    pub award_id: String,
    pub contract_id: String,
    /// Optional curation label. `Some(false)` marks a reviewed non-transition.
    pub label: Option<bool>,
}

impl GroundTruthTransition {
    pub fn new(award_id: impl Into<String>, contract_id: impl Into<String>) -> Self {
        Self {
            award_id: award_id.into(),
            contract_id: contract_id.into(),
            label: None,
        }
    }
}

/// Detector accuracy counts against ground truth.
///
/// `tn` is always 0: the candidate universe is open (any contract could in
/// principle pair with any award), so true negatives are not countable
/// without an explicitly defined negative universe, which no collaborator
/// provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub tn: u64,
}

impl ConfusionMatrix {
    pub fn new(tp: u64, fp: u64, fn_: u64) -> Self {
        Self { tp, fp, fn_, tn: 0 }
    }

    /// precision = tp / (tp + fp), 0 when the denominator is 0.
    pub fn precision(&self) -> f64 {
        let denom = self.tp + self.fp;
        if denom == 0 {
            0.0
        } else {
            self.tp as f64 / denom as f64
        }
    }

    /// recall = tp / (tp + fn), 0 when the denominator is 0.
    pub fn recall(&self) -> f64 {
        let denom = self.tp + self.fn_;
        if denom == 0 {
            0.0
        } else {
            self.tp as f64 / denom as f64
        }
    }

    /// f1 = 2pr / (p + r), 0 when p + r is 0.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_detection() {
        let m = ConfusionMatrix::new(10, 0, 0);
        assert_eq!(m.precision(), 1.0);
        assert_eq!(m.recall(), 1.0);
        assert_eq!(m.f1(), 1.0);
    }

    #[test]
    fn test_empty_matrix_is_all_zero() {
        let m = ConfusionMatrix::default();
        assert_eq!(m.precision(), 0.0);
        assert_eq!(m.recall(), 0.0);
        assert_eq!(m.f1(), 0.0);
    }

    #[test]
    fn test_half_and_half() {
        let m = ConfusionMatrix::new(1, 1, 1);
        assert_eq!(m.precision(), 0.5);
        assert_eq!(m.recall(), 0.5);
        assert!((m.f1() - 0.5).abs() < 1e-12);
    }
}
