//! Per-company transition rates.

use followon_core::types::collections::FxHashMap;
use followon_core::types::{Award, CompanyId, Detection};

use crate::rates::{distinct_awards, transitioned_ids};
use crate::types::{safe_rate, CompanyRateRow, CompanyRates};

/// Group awards by canonical company key and compute per-company counts.
///
/// Rows sort by (transitioned desc, total desc, key asc). Because every
/// award maps to exactly one company (the row-ordinal fallback guarantees
/// it), per-company totals sum to the distinct-award count.
pub fn company_transition_rates(awards: &[Award], detections: &[Detection]) -> CompanyRates {
    let awards = distinct_awards(awards);
    let transitioned = transitioned_ids(detections);

    struct Group {
        company: CompanyId,
        total: u64,
        transitioned: u64,
    }
    let mut groups: FxHashMap<String, Group> = FxHashMap::default();

    for (ordinal, award) in awards.iter().enumerate() {
        let company = CompanyId::for_award(award, ordinal);
        let entry = groups.entry(company.key.clone()).or_insert_with(|| Group {
            company,
            total: 0,
            transitioned: 0,
        });
        entry.total += 1;
        if transitioned.contains(award.award_id.trim()) {
            entry.transitioned += 1;
        }
    }

    let total_awards = awards.len() as u64;
    let transitioned_awards: u64 = groups.values().map(|g| g.transitioned).sum();

    let mut rows: Vec<CompanyRateRow> = groups
        .into_values()
        .map(|g| CompanyRateRow {
            rate: safe_rate(g.transitioned, g.total),
            company: g.company,
            total_awards: g.total,
            transitioned_awards: g.transitioned,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.transitioned_awards
            .cmp(&a.transitioned_awards)
            .then_with(|| b.total_awards.cmp(&a.total_awards))
            .then_with(|| a.company.key.cmp(&b.company.key))
    });

    CompanyRates {
        rows,
        total_awards,
        transitioned_awards,
        overall_rate: safe_rate(transitioned_awards, total_awards),
    }
}
