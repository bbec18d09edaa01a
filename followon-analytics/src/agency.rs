//! Transition effectiveness by funding agency.

use followon_core::types::collections::FxHashMap;
use followon_core::types::{Award, Detection};

use crate::rates::{distinct_awards, transitioned_ids};
use crate::types::{safe_rate, AgencyRateRow};

/// Transition rate per agency, sorted by (rate desc, volume desc).
///
/// Agency names are trimmed and upper-cased before grouping; awards with
/// no agency land in an `UNKNOWN` bucket rather than disappearing.
pub fn agency_breakdown(awards: &[Award], detections: &[Detection]) -> Vec<AgencyRateRow> {
    let awards = distinct_awards(awards);
    let transitioned = transitioned_ids(detections);

    let mut counts: FxHashMap<String, (u64, u64)> = FxHashMap::default();
    for award in &awards {
        let agency = award
            .agency
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| "UNKNOWN".to_string());
        let entry = counts.entry(agency).or_insert((0, 0));
        entry.0 += 1;
        if transitioned.contains(award.award_id.trim()) {
            entry.1 += 1;
        }
    }

    let mut rows: Vec<AgencyRateRow> = counts
        .into_iter()
        .map(|(agency, (total, transitioned))| AgencyRateRow {
            agency,
            total_awards: total,
            transitioned_awards: transitioned,
            rate: safe_rate(transitioned, total),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.rate
            .total_cmp(&a.rate)
            .then_with(|| b.total_awards.cmp(&a.total_awards))
            .then_with(|| a.agency.cmp(&b.agency))
    });
    rows
}
