//! Individual scoring factors.

use chrono::NaiveDate;
use followon_core::types::{AwardPatent, CompetitionType, Contract};

/// Factor names as they appear in the detection factor map.
pub mod factor {
    pub const BASE: &str = "base";
    pub const AGENCY_SAME: &str = "agency.same";
    pub const AGENCY_CROSS: &str = "agency.cross";
    pub const TIMING_0_3M: &str = "timing.0_3m";
    pub const TIMING_3_12M: &str = "timing.3_12m";
    pub const TIMING_12_24M: &str = "timing.12_24m";
    pub const COMPETITION_SOLE_SOURCE: &str = "competition.sole_source";
    pub const COMPETITION_LIMITED: &str = "competition.limited";
    pub const PATENT_PRESENT: &str = "patent.present";
    pub const PATENT_PRE_CONTRACT: &str = "patent.pre_contract_filing";
    pub const PATENT_TOPIC_OVERLAP: &str = "patent.topic_overlap";
    pub const TECH_AREA_MATCH: &str = "tech_area.match";
    pub const DESCRIPTION_SIMILARITY: &str = "description.similarity";
}

/// Timing bucket for the contract-start delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingBucket {
    /// 0–3 months after the award reference date.
    Within3Months,
    /// 3–12 months.
    Within12Months,
    /// 12–24 months.
    Within24Months,
    /// Beyond the scored window (excluded before scoring in practice).
    Beyond,
}

impl TimingBucket {
    /// Classify a day delta. Small negative deltas (backdated contract
    /// actions inside the configured tolerance) count as immediate.
    pub fn classify(delta_days: i64) -> Self {
        let days = delta_days.max(0);
        if days <= 92 {
            Self::Within3Months
        } else if days <= 365 {
            Self::Within12Months
        } else if days <= 730 {
            Self::Within24Months
        } else {
            Self::Beyond
        }
    }
}

/// Case-insensitive agency comparison on trimmed names.
pub fn agencies_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.map(str::trim), b.map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Whether any linked patent was filed before the contract action date.
pub fn patent_filed_before(patents: &[AwardPatent], action_date: NaiveDate) -> bool {
    patents
        .iter()
        .filter_map(|p| p.filing_date)
        .any(|filed| filed < action_date)
}

/// Whether any patent topic appears in the contract description or matches
/// the contract's technology tag.
pub fn patent_topics_overlap(patents: &[AwardPatent], contract: &Contract) -> bool {
    let description = contract.description.as_deref().map(str::to_ascii_lowercase);
    let tech_area = contract.tech_area.as_deref().map(str::to_ascii_lowercase);
    patents
        .iter()
        .flat_map(|p| p.topics.iter())
        .map(|topic| topic.to_ascii_lowercase())
        .filter(|topic| !topic.is_empty())
        .any(|topic| {
            description.as_deref().is_some_and(|d| d.contains(&topic))
                || tech_area.as_deref() == Some(topic.as_str())
        })
}

/// Competition-type factor selection.
pub fn competition_bucket(contract: &Contract) -> Option<CompetitionType> {
    contract.parsed_competition()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_buckets() {
        assert_eq!(TimingBucket::classify(0), TimingBucket::Within3Months);
        assert_eq!(TimingBucket::classify(92), TimingBucket::Within3Months);
        assert_eq!(TimingBucket::classify(93), TimingBucket::Within12Months);
        assert_eq!(TimingBucket::classify(365), TimingBucket::Within12Months);
        assert_eq!(TimingBucket::classify(366), TimingBucket::Within24Months);
        assert_eq!(TimingBucket::classify(730), TimingBucket::Within24Months);
        assert_eq!(TimingBucket::classify(731), TimingBucket::Beyond);
    }

    #[test]
    fn test_backdated_delta_counts_as_immediate() {
        assert_eq!(TimingBucket::classify(-5), TimingBucket::Within3Months);
    }

    #[test]
    fn test_agencies_match_trims_and_folds_case() {
        assert!(agencies_match(Some(" NASA "), Some("nasa")));
        assert!(!agencies_match(Some("NASA"), Some("NAVY")));
        assert!(!agencies_match(Some("NASA"), None));
        assert!(!agencies_match(Some(""), Some("")));
    }

    #[test]
    fn test_patent_topic_overlap_in_description() {
        let patents = vec![AwardPatent {
            award_id: "A1".into(),
            patent_id: "P1".into(),
            filing_date: None,
            topics: vec!["lidar".into()],
        }];
        let contract = Contract {
            contract_id: "C1".into(),
            description: Some("Production of LIDAR sensor units".into()),
            ..Default::default()
        };
        assert!(patent_topics_overlap(&patents, &contract));
    }
}
