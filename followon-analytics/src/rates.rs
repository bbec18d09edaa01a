//! Award-level transition rate.

use followon_core::types::collections::FxHashSet;
use followon_core::types::{Award, Detection};

use crate::types::{safe_rate, AwardRate};

/// Distinct transitioned awards over distinct total awards.
///
/// Duplicate award rows count once; detections referencing awards outside
/// the input table are ignored so the numerator can never exceed the
/// denominator.
pub fn award_transition_rate(awards: &[Award], detections: &[Detection]) -> AwardRate {
    let all_ids: FxHashSet<&str> = awards
        .iter()
        .map(|a| a.award_id.trim())
        .filter(|id| !id.is_empty())
        .collect();

    let transitioned: FxHashSet<&str> = detections
        .iter()
        .map(|d| d.award_id.trim())
        .filter(|id| all_ids.contains(id))
        .collect();

    AwardRate {
        total_awards: all_ids.len() as u64,
        transitioned_awards: transitioned.len() as u64,
        rate: safe_rate(transitioned.len() as u64, all_ids.len() as u64),
    }
}

/// Distinct award ids with at least one detection, shared by the grouped
/// aggregations.
pub(crate) fn transitioned_ids<'a>(detections: &'a [Detection]) -> FxHashSet<&'a str> {
    detections.iter().map(|d| d.award_id.trim()).collect()
}

/// Deduplicate award rows by trimmed award id, keeping first occurrence.
/// Grouped tables are built from this view so their totals always sum to
/// the distinct-award count.
pub(crate) fn distinct_awards(awards: &[Award]) -> Vec<&Award> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::with_capacity(awards.len());
    for award in awards {
        let id = award.award_id.trim();
        if id.is_empty() || !seen.insert(id) {
            continue;
        }
        out.push(award);
    }
    out
}
