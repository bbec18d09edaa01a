//! Transition detection for a single award.
//!
//! The fan-out-heavy path. Ordering of stages is deliberate: the window
//! filter and identity resolution run before the composite score so the
//! expensive stage only sees survivors. A malformed record is skipped with
//! a warning and never aborts the batch.

use followon_core::config::TransitionConfig;
use followon_core::errors::DetectionError;
use followon_core::types::collections::FxHashMap;
use followon_core::types::{Award, AwardPatent, Contract, Detection, DetectionMethod};

use crate::pipeline::batch::tolerate_record;
use crate::resolver::{EntityResolver, MatchStrength};
use crate::scoring::{factors, ScoringEngine};

/// Detections for one award plus the counters the run summary needs.
#[derive(Debug, Default)]
pub struct AwardDetectionResult {
    pub detections: Vec<Detection>,
    /// Candidates that survived the window filter and were scored.
    pub candidates_scored: usize,
    /// Records skipped as malformed (missing id or date).
    pub malformed_skipped: u32,
}

/// Detects follow-on transitions for awards against candidate contracts.
pub struct TransitionDetector {
    resolver: EntityResolver,
    engine: ScoringEngine,
    config: TransitionConfig,
}

impl TransitionDetector {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            resolver: EntityResolver::new(config.resolver.clone()),
            engine: ScoringEngine::new(config.scoring.clone()),
            config,
        }
    }

    pub fn resolver(&self) -> &EntityResolver {
        &self.resolver
    }

    /// Detect transitions for one award.
    ///
    /// `patents` is the award's patent linkage. `score_threshold` is the
    /// minimum composite score a pair must reach; pass the configured
    /// default from `DetectionConfig` for production runs.
    pub fn detect_for_award(
        &self,
        award: &Award,
        candidates: &[&Contract],
        patents: &[AwardPatent],
        score_threshold: f64,
    ) -> AwardDetectionResult {
        let mut result = AwardDetectionResult::default();

        let Some(reference) =
            tolerate_record(self.check_award(award), &mut result.malformed_skipped)
        else {
            return result;
        };

        let window = &self.config.window;
        let cutpoints = &self.config.detection.cutpoints;
        // Best scored entry per (award, contract) pair; exact duplicates merge.
        let mut best: FxHashMap<String, ScoredPair> = FxHashMap::default();

        for contract in candidates {
            let Some(action) =
                tolerate_record(self.check_contract(contract), &mut result.malformed_skipped)
            else {
                continue;
            };

            // Stage 1: window filter, before any scoring
            let delta_days = (action - reference).num_days();
            if delta_days < -window.backdating_tolerance_days
                || delta_days > window.max_lookback_days
            {
                continue;
            }

            // Stage 2: vendor identity
            let corroborated =
                factors::agencies_match(award.agency.as_deref(), contract.agency.as_deref());
            let strength = self.resolver.match_strength(
                &award.vendor_identity(),
                &contract.vendor_identity(),
                corroborated,
            );
            let method = match strength {
                MatchStrength::ExactId => DetectionMethod::ExactIdMatch,
                MatchStrength::FuzzyName => DetectionMethod::FuzzyNameMatch,
                MatchStrength::None => continue,
            };

            // Stage 3: composite score
            let breakdown = self.engine.score(award, contract, patents);
            result.candidates_scored += 1;
            if breakdown.value < score_threshold {
                continue;
            }

            let agency_weight = ScoringEngine::agency_weight_of(&breakdown.factors);
            let detection = Detection {
                award_id: award.award_id.trim().to_string(),
                contract_id: contract.contract_id.trim().to_string(),
                score: breakdown.value,
                band: cutpoints.band_for(breakdown.value),
                factors: breakdown.factors,
                method,
            };
            let entry = ScoredPair {
                detection,
                abs_delta_days: delta_days.abs(),
                agency_weight,
            };
            let key = entry.detection.contract_id.clone();
            let replace = best
                .get(&key)
                .map_or(true, |existing| entry.detection.score > existing.detection.score);
            if replace {
                best.insert(key, entry);
            }
        }

        let mut scored: Vec<ScoredPair> = best.into_values().collect();
        // Score desc, then closest-in-time, then strongest agency relation.
        scored.sort_by(|a, b| {
            b.detection
                .score
                .total_cmp(&a.detection.score)
                .then_with(|| a.abs_delta_days.cmp(&b.abs_delta_days))
                .then_with(|| b.agency_weight.total_cmp(&a.agency_weight))
                .then_with(|| a.detection.contract_id.cmp(&b.detection.contract_id))
        });
        result.detections = scored.into_iter().map(|s| s.detection).collect();
        result
    }

    fn check_award(&self, award: &Award) -> Result<chrono::NaiveDate, DetectionError> {
        if award.award_id.trim().is_empty() {
            return Err(DetectionError::malformed("<award>", "blank award_id"));
        }
        award
            .reference_date()
            .ok_or_else(|| DetectionError::MissingReferenceDate {
                award_id: award.award_id.clone(),
            })
    }

    fn check_contract(&self, contract: &Contract) -> Result<chrono::NaiveDate, DetectionError> {
        if contract.contract_id.trim().is_empty() {
            return Err(DetectionError::malformed("<contract>", "blank contract_id"));
        }
        contract
            .action_date
            .ok_or_else(|| {
                DetectionError::malformed(contract.contract_id.as_str(), "missing action_date")
            })
    }
}

struct ScoredPair {
    detection: Detection,
    abs_delta_days: i64,
    agency_weight: f64,
}
