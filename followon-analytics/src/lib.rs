//! # followon-analytics
//!
//! Pure aggregations over run outputs: transition rates by award, company,
//! phase, agency, and technology area, plus time-to-transition statistics.
//!
//! Every entry point is total and degrades gracefully — a missing optional
//! column or an empty input produces a typed-empty result, never an error.
//! Upstream schemas vary by data source, so field access goes through the
//! `FieldSource` capability where feeds disagree on column names.

pub mod agency;
pub mod company;
pub mod phase;
pub mod rates;
pub mod stats;
pub mod technology;
pub mod timing;
pub mod types;

use followon_core::types::{Award, AwardPatent, Contract, Detection};

pub use types::{
    AgencyRateRow, AnalyticsSummary, AwardRate, CompanyRateRow, CompanyRates, PhaseRateRow,
    TechEffectivenessRow, TimingSummary, TransitionTiming,
};

/// Run every aggregation and bundle the tables.
pub fn summarize(
    awards: &[Award],
    contracts: &[Contract],
    detections: &[Detection],
    patents: &[AwardPatent],
    score_threshold: f64,
) -> AnalyticsSummary {
    AnalyticsSummary {
        award_rate: rates::award_transition_rate(awards, detections),
        company_rates: company::company_transition_rates(awards, detections),
        phase_rates: phase::phase_effectiveness(awards, detections),
        agency_rates: agency::agency_breakdown(awards, detections),
        timing: timing::time_to_transition(awards, contracts, detections, score_threshold),
        technology: technology::technology_effectiveness(
            awards,
            contracts,
            detections,
            patents,
            score_threshold,
        ),
    }
}
