//! Evaluation result types.

use serde::{Deserialize, Serialize};

use followon_core::types::{ConfidenceBand, ConfusionMatrix};

use crate::report::ReportStatus;

/// Options controlling an evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOptions {
    /// Minimum detection score counted as a positive.
    pub score_threshold: f64,
    /// When set, only ground-truth rows labeled `true` count as truth;
    /// unlabeled rows are ignored. Off by default: every curated pair
    /// counts.
    pub use_label_filter: bool,
}

impl EvalOptions {
    pub fn at_threshold(score_threshold: f64) -> Self {
        Self {
            score_threshold,
            use_label_filter: false,
        }
    }
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self::at_threshold(0.60)
    }
}

/// Quality measurement of a detection run against ground truth.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub confusion: ConfusionMatrix,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Distinct detected pairs at or above the threshold.
    pub detected_count: u64,
    /// Distinct ground-truth pairs after label filtering.
    pub truth_count: u64,
    /// Per-band precision, descending confidence order.
    pub band_breakdown: Vec<BandBreakdown>,
    pub status: ReportStatus,
    /// Human-readable narrative with metrics, tables, and recommendations.
    pub report: String,
}

/// Detection quality within one confidence band.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BandBreakdown {
    pub band: ConfidenceBand,
    pub detections: u64,
    pub tp: u64,
    pub fp: u64,
    /// Band-local precision, 0 when the band is empty.
    pub precision: f64,
}
