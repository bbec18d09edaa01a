//! # followon-bench
//!
//! Benchmarks for the Followon detection pipeline: deterministic
//! award/contract population generators and baseline-comparable result
//! records.

pub mod fixtures;

/// Benchmark result for baseline comparison.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub duration_ms: f64,
    pub iterations: u64,
    /// Detections per minute, when the benchmark measures detection.
    pub throughput: Option<f64>,
}

impl BenchResult {
    /// Check if this result regresses vs a baseline by more than
    /// `threshold` (fractional, e.g. 0.10 for 10%).
    pub fn regresses_vs(&self, baseline: &BenchResult, threshold: f64) -> bool {
        if baseline.duration_ms <= 0.0 {
            return false;
        }
        let ratio = self.duration_ms / baseline.duration_ms;
        ratio > (1.0 + threshold)
    }
}
