//! Detection thresholds and batch sizing.

use serde::{Deserialize, Serialize};

use crate::types::BandCutpoints;

/// Detection threshold, confidence cutpoints, and batch fan-out sizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum composite score for a pair to become a Detection.
    pub score_threshold: f64,
    /// Awards per batch chunk.
    pub chunk_size: usize,
    /// Upper bound on concurrent batch workers.
    pub max_workers: usize,
    /// Score cutpoints mapping a score to a confidence band.
    pub cutpoints: BandCutpoints,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.60,
            chunk_size: 500,
            max_workers: 4,
            cutpoints: BandCutpoints::default(),
        }
    }
}
