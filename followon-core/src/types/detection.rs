//! Detection records and confidence bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::collections::FxHashMap;

/// A detected award → contract transition.
///
/// Not unique per award: one award may produce several follow-on contracts.
/// Only exact `(award_id, contract_id)` duplicates are merged. The host
/// persists these via idempotent upsert keyed on that pair.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub award_id: String,
    pub contract_id: String,
    /// Composite transition-likelihood score in [0, 1].
    pub score: f64,
    /// Band derived from `score` via the configured cutpoints.
    pub band: ConfidenceBand,
    /// Per-factor score contributions, for auditability.
    pub factors: FxHashMap<&'static str, f64>,
    /// How the vendor identity match was established.
    pub method: DetectionMethod,
}

/// Confidence band derived from a detection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceBand {
    /// score ≥ high cutpoint (default 0.85).
    High,
    /// score ≥ likely cutpoint (default 0.70).
    Likely,
    /// score ≥ detection threshold but below the likely cutpoint.
    Possible,
}

impl ConfidenceBand {
    /// All bands in descending-confidence order.
    pub const ALL: [ConfidenceBand; 3] = [Self::High, Self::Likely, Self::Possible];

    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Likely => "likely",
            Self::Possible => "possible",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The score cutpoints that map a continuous score to a band.
///
/// This is the single source of band boundaries — nothing else in the
/// engine compares scores to band constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandCutpoints {
    pub high: f64,
    pub likely: f64,
}

impl Default for BandCutpoints {
    fn default() -> Self {
        Self { high: 0.85, likely: 0.70 }
    }
}

impl BandCutpoints {
    /// Classify a score that already passed the detection threshold.
    pub fn band_for(&self, score: f64) -> ConfidenceBand {
        if score >= self.high {
            ConfidenceBand::High
        } else if score >= self.likely {
            ConfidenceBand::Likely
        } else {
            ConfidenceBand::Possible
        }
    }
}

/// How a detection's vendor identity match was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    /// Matched on an exact vendor identifier (UEI, CAGE, or DUNS).
    ExactIdMatch,
    /// Matched on fuzzy vendor-name similarity.
    FuzzyNameMatch,
}

impl DetectionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExactIdMatch => "exact_id",
            Self::FuzzyNameMatch => "fuzzy_name",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
