//! Schema-tolerant field access.
//!
//! Upstream schemas vary by data source — one feed calls the award date
//! `award_date`, another only has `completion_date`. Aggregations resolve
//! those differences through this capability trait instead of probing
//! concrete structs, and treat a miss as "column absent", never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dynamically-typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Str(String),
    Float(f64),
    Int(i64),
    Date(NaiveDate),
    Bool(bool),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

/// Capability trait for records whose columns may be absent.
pub trait FieldSource {
    /// Return the value of `name`, or `None` when the column is absent or
    /// unset on this record.
    fn get_optional(&self, name: &str) -> Option<FieldValue>;
}

/// Return the first of `candidates` that is present on `source`.
///
/// The aggregation workhorse: `first_present_column(award, &["award_date",
/// "completion_date"])` picks whichever reference date the feed carries.
pub fn first_present_column<S: FieldSource + ?Sized>(
    source: &S,
    candidates: &[&str],
) -> Option<FieldValue> {
    candidates.iter().find_map(|name| source.get_optional(name))
}
