//! Transition effectiveness by technology area.

use followon_core::types::collections::{FxHashMap, FxHashSet};
use followon_core::types::{Award, AwardPatent, Contract, Detection};

use crate::rates::{distinct_awards, transitioned_ids};
use crate::stats;
use crate::types::{safe_rate, TechEffectivenessRow};

/// Rate, mean days-to-transition, and patent-backed rate per technology
/// tag. Awards without a tag contribute to no row; with no tagged awards
/// at all the table is empty.
pub fn technology_effectiveness(
    awards: &[Award],
    contracts: &[Contract],
    detections: &[Detection],
    patents: &[AwardPatent],
    score_threshold: f64,
) -> Vec<TechEffectivenessRow> {
    let awards = distinct_awards(awards);
    let transitioned = transitioned_ids(detections);

    let patented_awards: FxHashSet<&str> =
        patents.iter().map(|p| p.award_id.trim()).collect();

    let mut contract_dates: FxHashMap<&str, chrono::NaiveDate> = FxHashMap::default();
    for contract in contracts {
        if let Some(date) = contract.action_date {
            contract_dates.entry(contract.contract_id.trim()).or_insert(date);
        }
    }

    // Tag → day deltas for that tag's detections.
    let mut award_tags: FxHashMap<&str, &str> = FxHashMap::default();
    let mut groups: FxHashMap<String, Group> = FxHashMap::default();
    for award in &awards {
        let Some(tag) = award.tech_area.as_deref().map(str::trim).filter(|t| !t.is_empty())
        else {
            continue;
        };
        let id = award.award_id.trim();
        award_tags.insert(id, tag);
        let entry = groups.entry(tag.to_string()).or_default();
        entry.total += 1;
        if transitioned.contains(id) {
            entry.transitioned += 1;
            if patented_awards.contains(id) {
                entry.patent_backed += 1;
            }
        }
    }

    let mut reference_dates: FxHashMap<&str, chrono::NaiveDate> = FxHashMap::default();
    for award in &awards {
        if let Some(date) = award.reference_date() {
            reference_dates.insert(award.award_id.trim(), date);
        }
    }
    for detection in detections {
        if detection.score < score_threshold {
            continue;
        }
        let award_id = detection.award_id.trim();
        let Some(tag) = award_tags.get(award_id) else {
            continue;
        };
        let (Some(reference), Some(action)) = (
            reference_dates.get(award_id),
            contract_dates.get(detection.contract_id.trim()),
        ) else {
            continue;
        };
        let delta_days = (*action - *reference).num_days();
        if delta_days < 0 {
            continue;
        }
        if let Some(group) = groups.get_mut(*tag) {
            group.deltas.push(delta_days as f64);
        }
    }

    let mut rows: Vec<TechEffectivenessRow> = groups
        .into_iter()
        .map(|(tech_area, group)| TechEffectivenessRow {
            tech_area,
            total_awards: group.total,
            transitioned_awards: group.transitioned,
            rate: safe_rate(group.transitioned, group.total),
            mean_days_to_transition: stats::mean(&group.deltas),
            patent_backed_rate: safe_rate(group.patent_backed, group.transitioned),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.rate
            .total_cmp(&a.rate)
            .then_with(|| b.total_awards.cmp(&a.total_awards))
            .then_with(|| a.tech_area.cmp(&b.tech_area))
    });
    rows
}

#[derive(Default)]
struct Group {
    total: u64,
    transitioned: u64,
    patent_backed: u64,
    deltas: Vec<f64>,
}
