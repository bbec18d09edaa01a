//! Time-to-transition statistics.

use tracing::debug;

use followon_core::types::collections::FxHashMap;
use followon_core::types::{first_present_column, Award, Contract, Detection};

use crate::stats;
use crate::types::{TimingSummary, TransitionTiming};

/// Join award reference dates to matched contract dates and summarize the
/// day deltas overall, per agency, and per technology tag.
///
/// Only detections at or above `score_threshold` join; pairs with a
/// negative delta are dropped as invalid. Awards or contracts missing
/// dates simply contribute nothing — an entirely dateless input yields the
/// typed-empty summary.
pub fn time_to_transition(
    awards: &[Award],
    contracts: &[Contract],
    detections: &[Detection],
    score_threshold: f64,
) -> TimingSummary {
    let mut award_info: FxHashMap<&str, &Award> = FxHashMap::default();
    for award in awards {
        award_info.entry(award.award_id.trim()).or_insert(award);
    }
    let mut contract_dates: FxHashMap<&str, chrono::NaiveDate> = FxHashMap::default();
    for contract in contracts {
        if let Some(date) = contract.action_date {
            contract_dates.entry(contract.contract_id.trim()).or_insert(date);
        }
    }

    let mut overall: Vec<f64> = Vec::new();
    let mut by_agency: FxHashMap<String, Vec<f64>> = FxHashMap::default();
    let mut by_tech: FxHashMap<String, Vec<f64>> = FxHashMap::default();
    let mut dropped_negative = 0u64;

    for detection in detections {
        if detection.score < score_threshold {
            continue;
        }
        let Some(award) = award_info.get(detection.award_id.trim()) else {
            continue;
        };
        // Feeds disagree on which reference date they carry.
        let Some(reference) = first_present_column(*award, &["award_date", "completion_date"])
            .and_then(|v| v.as_date())
        else {
            continue;
        };
        let Some(action) = contract_dates.get(detection.contract_id.trim()) else {
            continue;
        };

        let delta_days = (*action - reference).num_days();
        if delta_days < 0 {
            dropped_negative += 1;
            continue;
        }
        let days = delta_days as f64;
        overall.push(days);
        if let Some(agency) = award.agency.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
            by_agency.entry(agency.to_ascii_uppercase()).or_default().push(days);
        }
        if let Some(tech) = award.tech_area.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            by_tech.entry(tech.to_string()).or_default().push(days);
        }
    }
    if dropped_negative > 0 {
        debug!(dropped_negative, "dropped negative day deltas from timing");
    }

    TimingSummary {
        overall: summarize_deltas(overall),
        by_agency: summarize_groups(by_agency),
        by_tech_area: summarize_groups(by_tech),
    }
}

fn summarize_deltas(mut values: Vec<f64>) -> TransitionTiming {
    if values.is_empty() {
        return TransitionTiming::default();
    }
    values.sort_by(f64::total_cmp);
    TransitionTiming {
        n: values.len() as u64,
        mean_days: stats::mean(&values),
        median_days: stats::percentile_linear(&values, 0.5),
        p90_days: stats::percentile_linear(&values, 0.9),
    }
}

fn summarize_groups(groups: FxHashMap<String, Vec<f64>>) -> Vec<(String, TransitionTiming)> {
    let mut rows: Vec<(String, TransitionTiming)> = groups
        .into_iter()
        .map(|(key, values)| (key, summarize_deltas(values)))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}
