//! Time-window cutoffs for candidate filtering.

use serde::{Deserialize, Serialize};

/// The window a contract must land in relative to the award reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Maximum days after the award reference date a contract may start.
    /// Pairs beyond this are excluded before scoring.
    pub max_lookback_days: i64,
    /// Days a contract may predate the award reference date and still be
    /// considered (source systems backdate contract actions occasionally).
    pub backdating_tolerance_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_lookback_days: 730,
            backdating_tolerance_days: 0,
        }
    }
}
