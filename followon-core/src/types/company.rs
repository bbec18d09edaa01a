//! Canonical company grouping key.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::award::Award;

/// Canonical key used to group awards by company.
///
/// Priority: UEI > DUNS > normalized vendor name > row ordinal. The ordinal
/// fallback guarantees every award lands in exactly one group, so grouped
/// totals always sum back to the distinct-award count.
///
/// This key groups awards for rate analytics only — it never asserts that
/// two records are the same legal entity. Identity resolution proper lives
/// in the detection engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId {
    /// Stable grouping key, e.g. `uei:ABC123`, `name:acme defense`.
    pub key: String,
    /// Best-effort display name for reports.
    pub display_name: String,
}

impl CompanyId {
    /// Derive the grouping key for an award. `ordinal` is the award's row
    /// position, used only as the last-resort key.
    pub fn for_award(award: &Award, ordinal: usize) -> Self {
        let display_name = award
            .vendor_name
            .clone()
            .unwrap_or_else(|| award.award_id.clone());

        if let Some(uei) = non_blank(award.uei.as_deref()) {
            return Self {
                key: format!("uei:{}", uei.to_ascii_uppercase()),
                display_name,
            };
        }
        if let Some(duns) = non_blank(award.duns.as_deref()) {
            return Self {
                key: format!("duns:{}", duns),
                display_name,
            };
        }
        if let Some(name) = non_blank(award.vendor_name.as_deref()) {
            let folded = fold_name(name);
            if !folded.is_empty() {
                return Self {
                    key: format!("name:{}", folded),
                    display_name,
                };
            }
        }
        Self {
            key: format!("row:{}", ordinal),
            display_name,
        }
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Case-fold a vendor name for grouping: lowercase, strip punctuation,
/// collapse whitespace. Coarser than the detection-time normalization on
/// purpose — grouping keys must be cheap and stable.
pub fn fold_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_space = true;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_space = false;
        } else if !last_space {
            out.push(' ');
            last_space = true;
        }
    }
    out.trim_end().to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
