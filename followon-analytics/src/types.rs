//! Aggregation result tables.
//!
//! Each table is a plain row-oriented collection, serde-serializable for
//! host export. "Empty but valid" instances (zero counts, empty rows) are
//! the graceful-degradation values for absent inputs.

use serde::Serialize;

use followon_core::types::{CompanyId, Phase};

/// Overall award-level transition rate.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AwardRate {
    /// Distinct awards in the input.
    pub total_awards: u64,
    /// Distinct awards with at least one detection.
    pub transitioned_awards: u64,
    /// transitioned / total, 0 when there are no awards.
    pub rate: f64,
}

/// Per-company transition counts.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyRateRow {
    pub company: CompanyId,
    pub total_awards: u64,
    pub transitioned_awards: u64,
    pub rate: f64,
}

/// Company rate table with the run-level fraction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyRates {
    /// Sorted by (transitioned desc, total desc).
    pub rows: Vec<CompanyRateRow>,
    pub total_awards: u64,
    pub transitioned_awards: u64,
    pub overall_rate: f64,
}

/// Transition rate for one normalized phase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhaseRateRow {
    pub phase: Phase,
    pub total_awards: u64,
    pub transitioned_awards: u64,
    pub rate: f64,
}

/// Transition rate for one funding agency.
#[derive(Debug, Clone, Serialize)]
pub struct AgencyRateRow {
    /// Trimmed, upper-cased agency name.
    pub agency: String,
    pub total_awards: u64,
    pub transitioned_awards: u64,
    pub rate: f64,
}

/// Days-to-transition statistics for one grouping.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TransitionTiming {
    pub n: u64,
    pub mean_days: f64,
    pub median_days: f64,
    pub p90_days: f64,
}

/// Time-to-transition rollup: overall plus per-agency and per-tech-area.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimingSummary {
    pub overall: TransitionTiming,
    /// Sorted by agency name.
    pub by_agency: Vec<(String, TransitionTiming)>,
    /// Sorted by technology tag.
    pub by_tech_area: Vec<(String, TransitionTiming)>,
}

/// Effectiveness metrics for one technology-area tag.
#[derive(Debug, Clone, Serialize)]
pub struct TechEffectivenessRow {
    pub tech_area: String,
    pub total_awards: u64,
    pub transitioned_awards: u64,
    pub rate: f64,
    /// Mean days to transition for this tag's detections, 0 when none.
    pub mean_days_to_transition: f64,
    /// Fraction of transitioned awards backed by at least one patent.
    pub patent_backed_rate: f64,
}

/// The full analytics bundle, one named table per aggregation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsSummary {
    pub award_rate: AwardRate,
    pub company_rates: CompanyRates,
    pub phase_rates: Vec<PhaseRateRow>,
    pub agency_rates: Vec<AgencyRateRow>,
    pub timing: TimingSummary,
    pub technology: Vec<TechEffectivenessRow>,
}

impl AnalyticsSummary {
    /// Export as a named mapping of row-oriented JSON tables.
    pub fn to_tables(&self) -> Vec<(&'static str, serde_json::Value)> {
        let json = |v: serde_json::Result<serde_json::Value>| v.unwrap_or(serde_json::Value::Null);
        vec![
            ("award_rate", json(serde_json::to_value(self.award_rate))),
            ("company_rates", json(serde_json::to_value(&self.company_rates))),
            ("phase_rates", json(serde_json::to_value(&self.phase_rates))),
            ("agency_rates", json(serde_json::to_value(&self.agency_rates))),
            ("time_to_transition", json(serde_json::to_value(&self.timing))),
            ("technology_effectiveness", json(serde_json::to_value(&self.technology))),
        ]
    }
}

/// rate = numerator / denominator, 0 when the denominator is 0.
pub(crate) fn safe_rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
