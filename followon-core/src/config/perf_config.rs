//! Throughput target configuration.

use serde::{Deserialize, Serialize};

/// Performance targets validated by the performance monitor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerfConfig {
    /// Detections per minute a full batch run must sustain.
    pub target_detections_per_minute: f64,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            target_detections_per_minute: 10_000.0,
        }
    }
}
