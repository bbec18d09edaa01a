//! Award and contract input records.
//!
//! Both are immutable snapshots handed over by the ingestion collaborator.
//! Optional fields stay `Option` all the way through — scoring factors and
//! aggregations that need an absent field skip silently rather than erroring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{FieldSource, FieldValue};

/// A small-business research award (the potential transition origin).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Award {
    /// Unique award identifier.
    pub award_id: String,
    /// Unique Entity Identifier, when reported.
    pub uei: Option<String>,
    /// CAGE code, when reported.
    pub cage: Option<String>,
    /// Legacy DUNS number, when reported.
    pub duns: Option<String>,
    /// Vendor display name as it appears on the award.
    pub vendor_name: Option<String>,
    /// Free-text phase label ("Phase II", "2", "ii", ...).
    pub phase: Option<String>,
    /// Funding agency name.
    pub agency: Option<String>,
    /// Award start date.
    pub award_date: Option<NaiveDate>,
    /// Award completion date.
    pub completion_date: Option<NaiveDate>,
    /// Critical/emerging technology area tag, when classified.
    pub tech_area: Option<String>,
    /// Award amount in dollars.
    pub amount: Option<f64>,
    /// Award abstract / topic description.
    pub description: Option<String>,
}

impl Award {
    /// The reference date transitions are measured from:
    /// award date, falling back to completion date.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.award_date.or(self.completion_date)
    }

    /// Vendor identity fields as a borrowed view.
    pub fn vendor_identity(&self) -> VendorIdentity<'_> {
        VendorIdentity {
            uei: self.uei.as_deref(),
            cage: self.cage.as_deref(),
            duns: self.duns.as_deref(),
            name: self.vendor_name.as_deref(),
        }
    }

    /// Normalized phase, `Phase::Unknown` when the label does not parse.
    pub fn normalized_phase(&self) -> Phase {
        self.phase.as_deref().map(Phase::normalize).unwrap_or(Phase::Unknown)
    }
}

impl FieldSource for Award {
    fn get_optional(&self, name: &str) -> Option<FieldValue> {
        match name {
            "award_id" => Some(FieldValue::Str(self.award_id.clone())),
            "uei" => self.uei.clone().map(FieldValue::Str),
            "cage" => self.cage.clone().map(FieldValue::Str),
            "duns" => self.duns.clone().map(FieldValue::Str),
            "vendor_name" => self.vendor_name.clone().map(FieldValue::Str),
            "phase" => self.phase.clone().map(FieldValue::Str),
            "agency" => self.agency.clone().map(FieldValue::Str),
            "award_date" => self.award_date.map(FieldValue::Date),
            "completion_date" => self.completion_date.map(FieldValue::Date),
            "tech_area" => self.tech_area.clone().map(FieldValue::Str),
            "amount" => self.amount.map(FieldValue::Float),
            "description" => self.description.clone().map(FieldValue::Str),
            _ => None,
        }
    }
}

/// A procurement contract (the potential transition destination).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Contract {
    /// Unique contract identifier.
    pub contract_id: String,
    pub uei: Option<String>,
    pub cage: Option<String>,
    pub duns: Option<String>,
    pub vendor_name: Option<String>,
    /// Funding agency name.
    pub agency: Option<String>,
    /// Contract action / start date.
    pub action_date: Option<NaiveDate>,
    /// Free-text description of the contracted work.
    pub description: Option<String>,
    /// Competition type as reported by the source system.
    pub competition_type: Option<String>,
    /// Contract amount in dollars.
    pub amount: Option<f64>,
    /// Technology-area tag, on feeds that classify contract actions.
    pub tech_area: Option<String>,
}

impl Contract {
    /// Vendor identity fields as a borrowed view.
    pub fn vendor_identity(&self) -> VendorIdentity<'_> {
        VendorIdentity {
            uei: self.uei.as_deref(),
            cage: self.cage.as_deref(),
            duns: self.duns.as_deref(),
            name: self.vendor_name.as_deref(),
        }
    }

    /// Parsed competition type, `None` when not reported.
    pub fn parsed_competition(&self) -> Option<CompetitionType> {
        self.competition_type.as_deref().map(CompetitionType::parse)
    }
}

impl FieldSource for Contract {
    fn get_optional(&self, name: &str) -> Option<FieldValue> {
        match name {
            "contract_id" => Some(FieldValue::Str(self.contract_id.clone())),
            "uei" => self.uei.clone().map(FieldValue::Str),
            "cage" => self.cage.clone().map(FieldValue::Str),
            "duns" => self.duns.clone().map(FieldValue::Str),
            "vendor_name" => self.vendor_name.clone().map(FieldValue::Str),
            "agency" => self.agency.clone().map(FieldValue::Str),
            "action_date" => self.action_date.map(FieldValue::Date),
            "description" => self.description.clone().map(FieldValue::Str),
            "competition_type" => self.competition_type.clone().map(FieldValue::Str),
            "amount" => self.amount.map(FieldValue::Float),
            "tech_area" => self.tech_area.clone().map(FieldValue::Str),
            _ => None,
        }
    }
}

/// Borrowed view of the vendor identity fields a record carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct VendorIdentity<'a> {
    pub uei: Option<&'a str>,
    pub cage: Option<&'a str>,
    pub duns: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl VendorIdentity<'_> {
    /// True when no identifier and no name is present.
    pub fn is_empty(&self) -> bool {
        self.uei.is_none() && self.cage.is_none() && self.duns.is_none() && self.name.is_none()
    }
}

/// Normalized award phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    I,
    II,
    III,
    Unknown,
}

impl Phase {
    /// Normalize a free-text phase label.
    ///
    /// Case-insensitive, tolerates a "phase" prefix and arabic numerals:
    /// "Phase II", "phase 2", "II", "2" all map to `Phase::II`.
    pub fn normalize(label: &str) -> Self {
        let cleaned = label.trim().to_ascii_lowercase();
        let cleaned = cleaned.strip_prefix("phase").unwrap_or(&cleaned).trim();
        match cleaned {
            "i" | "1" => Self::I,
            "ii" | "2" => Self::II,
            "iii" | "3" => Self::III,
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Competition type of a contract action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionType {
    SoleSource,
    LimitedCompetition,
    FullAndOpen,
    Other,
}

impl CompetitionType {
    /// Lenient parse from the free-text competition labels source systems
    /// actually emit.
    pub fn parse(label: &str) -> Self {
        let lower = label.trim().to_ascii_lowercase();
        if lower.contains("sole source") || lower.contains("only one source") {
            Self::SoleSource
        } else if lower.contains("limited") || lower.contains("set-aside") || lower.contains("set aside") {
            Self::LimitedCompetition
        } else if lower.contains("full and open") || lower.contains("competed") {
            Self::FullAndOpen
        } else {
            Self::Other
        }
    }
}
