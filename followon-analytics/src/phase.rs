//! Transition effectiveness by award phase.

use followon_core::types::collections::FxHashMap;
use followon_core::types::{Award, Detection, Phase};

use crate::rates::{distinct_awards, transitioned_ids};
use crate::types::{safe_rate, PhaseRateRow};

/// Transition rate per normalized phase.
///
/// Labels normalize case- and prefix-insensitively ("Phase II", "2", "ii"
/// all land in `Phase::II`); unparseable labels group under
/// `Phase::Unknown` so the table still sums to the distinct-award count.
pub fn phase_effectiveness(awards: &[Award], detections: &[Detection]) -> Vec<PhaseRateRow> {
    let awards = distinct_awards(awards);
    let transitioned = transitioned_ids(detections);

    let mut counts: FxHashMap<Phase, (u64, u64)> = FxHashMap::default();
    for award in &awards {
        let entry = counts.entry(award.normalized_phase()).or_insert((0, 0));
        entry.0 += 1;
        if transitioned.contains(award.award_id.trim()) {
            entry.1 += 1;
        }
    }

    [Phase::I, Phase::II, Phase::III, Phase::Unknown]
        .into_iter()
        .filter_map(|phase| {
            counts.get(&phase).map(|(total, transitioned)| PhaseRateRow {
                phase,
                total_awards: *total,
                transitioned_awards: *transitioned,
                rate: safe_rate(*transitioned, *total),
            })
        })
        .collect()
}
