//! Award → patent linkage supplied by the patents collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patent attributed to an award's funded research.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AwardPatent {
    pub award_id: String,
    pub patent_id: String,
    /// Patent application filing date, when known.
    pub filing_date: Option<NaiveDate>,
    /// Topic tags extracted from the patent classification.
    pub topics: Vec<String>,
}
