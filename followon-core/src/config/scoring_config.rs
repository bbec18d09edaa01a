//! Scoring weights for the transition-likelihood composite.

use serde::{Deserialize, Serialize};

/// Additive weights for each scoring factor.
///
/// The composite is `base_score` plus every factor that fires, clipped to
/// [0, 1]. Defaults are calibrated so a same-agency contract landing within
/// three months of the award scores well above the default 0.60 threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Floor contribution for any pair that survives vendor matching and
    /// the window filter.
    pub base_score: f64,

    /// Contract funded by the same agency as the award.
    pub same_agency: f64,
    /// Contract funded by a different agency or service branch.
    pub cross_agency: f64,

    /// Contract starts 0–3 months after the award reference date.
    pub timing_0_3m: f64,
    /// Contract starts 3–12 months after.
    pub timing_3_12m: f64,
    /// Contract starts 12–24 months after.
    pub timing_12_24m: f64,

    /// Sole-source competition.
    pub sole_source: f64,
    /// Limited competition / set-aside.
    pub limited_competition: f64,

    /// The award produced at least one patent.
    pub has_patent: f64,
    /// A linked patent was filed before the contract action date.
    pub patent_filed_pre_contract: f64,
    /// A linked patent's topics overlap the contract description.
    pub patent_topic_overlap: f64,

    /// Award and contract share a classified technology-area tag.
    pub tech_area_match: f64,

    /// Maximum contribution from description similarity; scaled by the
    /// normalized string-similarity measure. Lowest-weight factor.
    pub description_similarity: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 0.30,
            same_agency: 0.25,
            cross_agency: 0.10,
            timing_0_3m: 0.20,
            timing_3_12m: 0.12,
            timing_12_24m: 0.05,
            sole_source: 0.15,
            limited_competition: 0.08,
            has_patent: 0.05,
            patent_filed_pre_contract: 0.05,
            patent_topic_overlap: 0.05,
            tech_area_match: 0.10,
            description_similarity: 0.05,
        }
    }
}

impl ScoringConfig {
    /// All weights as (field path, value) pairs, for validation.
    pub(crate) fn weight_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("scoring.base_score", self.base_score),
            ("scoring.same_agency", self.same_agency),
            ("scoring.cross_agency", self.cross_agency),
            ("scoring.timing_0_3m", self.timing_0_3m),
            ("scoring.timing_3_12m", self.timing_3_12m),
            ("scoring.timing_12_24m", self.timing_12_24m),
            ("scoring.sole_source", self.sole_source),
            ("scoring.limited_competition", self.limited_competition),
            ("scoring.has_patent", self.has_patent),
            ("scoring.patent_filed_pre_contract", self.patent_filed_pre_contract),
            ("scoring.patent_topic_overlap", self.patent_topic_overlap),
            ("scoring.tech_area_match", self.tech_area_match),
            ("scoring.description_similarity", self.description_similarity),
        ]
    }
}
