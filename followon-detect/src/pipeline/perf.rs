//! Performance tracking and throughput validation.

use std::time::Instant;

use serde::Serialize;

use followon_core::types::collections::FxHashMap;

/// An in-flight tracked operation. Obtain via [`PerfMonitor::start`],
/// close via [`PerfMonitor::end`].
#[derive(Debug)]
pub struct TrackHandle {
    name: String,
    started: Instant,
    start_rss_kb: Option<u64>,
}

/// Completed metrics for one tracked operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationMetrics {
    pub name: String,
    pub duration_ms: u64,
    pub items_processed: u64,
    pub items_per_second: f64,
    /// Resident-set delta over the operation, when the platform exposes it.
    pub memory_delta_kb: Option<i64>,
}

/// Records wall-clock duration, throughput, and memory deltas for named
/// operations within a run.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    operations: Vec<OperationMetrics>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking a named operation.
    pub fn start(&self, name: &str) -> TrackHandle {
        TrackHandle {
            name: name.to_string(),
            started: Instant::now(),
            start_rss_kb: current_rss_kb(),
        }
    }

    /// Close a tracked operation, recording `items_processed` for the
    /// throughput figure.
    pub fn end(&mut self, handle: TrackHandle, items_processed: u64) -> &OperationMetrics {
        let duration_ms = handle.started.elapsed().as_millis() as u64;
        let seconds = duration_ms as f64 / 1000.0;
        let items_per_second = if seconds > 0.0 {
            items_processed as f64 / seconds
        } else {
            0.0
        };
        let memory_delta_kb = match (handle.start_rss_kb, current_rss_kb()) {
            (Some(start), Some(end)) => Some(end as i64 - start as i64),
            _ => None,
        };
        self.operations.push(OperationMetrics {
            name: handle.name,
            duration_ms,
            items_processed,
            items_per_second,
            memory_delta_kb,
        });
        self.operations.last().expect("just pushed")
    }

    pub fn operations(&self) -> &[OperationMetrics] {
        &self.operations
    }

    /// Flat name → value mapping for host-side export.
    pub fn to_flat_map(&self) -> FxHashMap<String, f64> {
        let mut map = FxHashMap::default();
        for op in &self.operations {
            map.insert(format!("{}.duration_ms", op.name), op.duration_ms as f64);
            map.insert(format!("{}.items", op.name), op.items_processed as f64);
            map.insert(format!("{}.items_per_second", op.name), op.items_per_second);
            if let Some(delta) = op.memory_delta_kb {
                map.insert(format!("{}.memory_delta_kb", op.name), delta as f64);
            }
        }
        map
    }
}

/// Run-level throughput metrics checked against the configured target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectionThroughput {
    pub awards_count: u64,
    pub contracts_count: u64,
    pub detections_count: u64,
    pub total_time_ms: u64,
    pub detections_per_minute: f64,
    pub target_detections_per_minute: f64,
    pub meets_target: bool,
}

/// Compute run throughput and validate it against the target.
///
/// A zero-duration run reports zero throughput and fails the target —
/// it means timing instrumentation was bypassed, not that the run was
/// infinitely fast.
pub fn profile_detection_performance(
    awards_count: u64,
    contracts_count: u64,
    detections_count: u64,
    total_time_ms: u64,
    target_detections_per_minute: f64,
) -> DetectionThroughput {
    let detections_per_minute = if total_time_ms == 0 {
        0.0
    } else {
        detections_count as f64 * 60_000.0 / total_time_ms as f64
    };
    DetectionThroughput {
        awards_count,
        contracts_count,
        detections_count,
        total_time_ms,
        detections_per_minute,
        target_detections_per_minute,
        meets_target: total_time_ms > 0 && detections_per_minute >= target_detections_per_minute,
    }
}

/// Current resident set size in kilobytes, when the platform exposes it.
#[cfg(target_os = "linux")]
fn current_rss_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

#[cfg(not(target_os = "linux"))]
fn current_rss_kb() -> Option<u64> {
    None
}
