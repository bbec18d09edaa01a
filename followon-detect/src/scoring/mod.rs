//! Composite transition-likelihood scoring.
//!
//! Additive model: base score plus independently-applied weighted
//! contributions. Every factor tolerates missing optional inputs by
//! skipping silently — a pair is never rejected here for lacking a
//! description or a patent link. The final value is clipped to [0, 1].

pub mod factors;

use serde::Serialize;

use followon_core::config::ScoringConfig;
use followon_core::types::collections::FxHashMap;
use followon_core::types::{Award, AwardPatent, CompetitionType, Contract};

use factors::{factor, TimingBucket};

/// A composite score with its per-factor audit trail.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    /// Composite score in [0, 1].
    pub value: f64,
    /// Contribution of every factor that fired.
    pub factors: FxHashMap<&'static str, f64>,
}

/// Computes transition-likelihood scores for (award, contract) pairs.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a pair. `patents` is the award's patent linkage (possibly
    /// empty); candidates outside the lookback window must be rejected by
    /// the caller before scoring.
    pub fn score(
        &self,
        award: &Award,
        contract: &Contract,
        patents: &[AwardPatent],
    ) -> ScoreBreakdown {
        let w = &self.config;
        let mut contributions: FxHashMap<&'static str, f64> = FxHashMap::default();
        let mut add = |name: &'static str, weight: f64| {
            if weight > 0.0 {
                contributions.insert(name, weight);
            }
        };

        add(factor::BASE, w.base_score);

        // Agency relationship
        match (award.agency.as_deref(), contract.agency.as_deref()) {
            (Some(a), Some(c)) if factors::agencies_match(Some(a), Some(c)) => {
                add(factor::AGENCY_SAME, w.same_agency);
            }
            (Some(a), Some(c)) if !a.trim().is_empty() && !c.trim().is_empty() => {
                add(factor::AGENCY_CROSS, w.cross_agency);
            }
            _ => {}
        }

        // Timing bucket
        if let (Some(reference), Some(action)) = (award.reference_date(), contract.action_date) {
            let delta_days = (action - reference).num_days();
            match TimingBucket::classify(delta_days) {
                TimingBucket::Within3Months => add(factor::TIMING_0_3M, w.timing_0_3m),
                TimingBucket::Within12Months => add(factor::TIMING_3_12M, w.timing_3_12m),
                TimingBucket::Within24Months => add(factor::TIMING_12_24M, w.timing_12_24m),
                TimingBucket::Beyond => {}
            }
        }

        // Competition type
        match factors::competition_bucket(contract) {
            Some(CompetitionType::SoleSource) => {
                add(factor::COMPETITION_SOLE_SOURCE, w.sole_source)
            }
            Some(CompetitionType::LimitedCompetition) => {
                add(factor::COMPETITION_LIMITED, w.limited_competition)
            }
            _ => {}
        }

        // Patent evidence — three independently additive bonuses
        if !patents.is_empty() {
            add(factor::PATENT_PRESENT, w.has_patent);
            if let Some(action) = contract.action_date {
                if factors::patent_filed_before(patents, action) {
                    add(factor::PATENT_PRE_CONTRACT, w.patent_filed_pre_contract);
                }
            }
            if factors::patent_topics_overlap(patents, contract) {
                add(factor::PATENT_TOPIC_OVERLAP, w.patent_topic_overlap);
            }
        }

        // Technology-area alignment
        if let (Some(award_area), Some(contract_area)) =
            (award.tech_area.as_deref(), contract.tech_area.as_deref())
        {
            if !award_area.trim().is_empty()
                && award_area.trim().eq_ignore_ascii_case(contract_area.trim())
            {
                add(factor::TECH_AREA_MATCH, w.tech_area_match);
            }
        }

        // Free-text similarity — lowest weight, scaled by the measure
        if let (Some(award_text), Some(contract_text)) =
            (award.description.as_deref(), contract.description.as_deref())
        {
            if !award_text.is_empty() && !contract_text.is_empty() {
                let similarity = strsim::jaro_winkler(
                    &award_text.to_ascii_lowercase(),
                    &contract_text.to_ascii_lowercase(),
                );
                let contribution = w.description_similarity * similarity;
                if contribution > 0.0 {
                    contributions.insert(factor::DESCRIPTION_SIMILARITY, contribution);
                }
            }
        }

        let value = contributions.values().sum::<f64>().clamp(0.0, 1.0);
        ScoreBreakdown {
            value,
            factors: contributions,
        }
    }

    /// The agency contribution recorded in a factor map, for tie-breaking.
    pub fn agency_weight_of(factors: &FxHashMap<&'static str, f64>) -> f64 {
        factors
            .get(factor::AGENCY_SAME)
            .or_else(|| factors.get(factor::AGENCY_CROSS))
            .copied()
            .unwrap_or(0.0)
    }
}
