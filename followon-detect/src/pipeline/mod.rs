//! Run-level orchestration: candidate indexing, chunked fan-out, and
//! throughput instrumentation.
//!
//! A run is a pure function of its input snapshots — no persistent state,
//! no mid-run cancellation. A failed run is abandoned and retried from the
//! start; the host never sees a partial detection set.

pub mod batch;
pub mod perf;

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use followon_core::config::TransitionConfig;
use followon_core::errors::{BatchError, ConfigError, DetectionError};
use followon_core::types::collections::{FxHashMap, FxHashSet};
use followon_core::types::{Award, AwardPatent, Contract, Detection};

use crate::detector::TransitionDetector;
use crate::resolver::EntityResolver;

pub use perf::{DetectionThroughput, OperationMetrics, PerfMonitor, TrackHandle};

/// Candidate index over the contract table.
///
/// Blocks contracts by exact vendor identifiers and by a coarse phonetic
/// name key so each award only sees plausibly-matching candidates instead
/// of the full table. The window filter and real identity matching still
/// run downstream; this only bounds fan-out cost.
pub struct ContractIndex<'a> {
    by_id: FxHashMap<String, Vec<&'a Contract>>,
    by_name_block: FxHashMap<String, Vec<&'a Contract>>,
}

impl<'a> ContractIndex<'a> {
    pub fn build(contracts: &'a [Contract], resolver: &EntityResolver) -> Self {
        let mut by_id: FxHashMap<String, Vec<&'a Contract>> = FxHashMap::default();
        let mut by_name_block: FxHashMap<String, Vec<&'a Contract>> = FxHashMap::default();

        for contract in contracts {
            for key in id_keys(
                contract.uei.as_deref(),
                contract.cage.as_deref(),
                contract.duns.as_deref(),
            ) {
                by_id.entry(key).or_default().push(contract);
            }
            if let Some(name) = contract.vendor_name.as_deref() {
                if let Some(block) = resolver.name_block_key(name) {
                    by_name_block.entry(block).or_default().push(contract);
                }
            }
        }

        Self {
            by_id,
            by_name_block,
        }
    }

    /// Candidate contracts for an award, deduplicated by contract id.
    pub fn candidates_for(&self, award: &Award, resolver: &EntityResolver) -> Vec<&'a Contract> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut candidates = Vec::new();
        let mut take = |bucket: Option<&Vec<&'a Contract>>| {
            if let Some(bucket) = bucket {
                for contract in bucket {
                    if seen.insert(contract.contract_id.as_str()) {
                        candidates.push(*contract);
                    }
                }
            }
        };

        for key in id_keys(
            award.uei.as_deref(),
            award.cage.as_deref(),
            award.duns.as_deref(),
        ) {
            take(self.by_id.get(&key));
        }
        if let Some(name) = award.vendor_name.as_deref() {
            if let Some(block) = resolver.name_block_key(name) {
                take(self.by_name_block.get(&block));
            }
        }

        candidates
    }

    pub fn indexed_contracts(&self) -> usize {
        self.by_id.values().map(Vec::len).sum::<usize>()
            + self.by_name_block.values().map(Vec::len).sum::<usize>()
    }
}

fn id_keys(uei: Option<&str>, cage: Option<&str>, duns: Option<&str>) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(uei) = non_blank(uei) {
        keys.push(format!("uei:{}", uei.to_ascii_uppercase()));
    }
    if let Some(cage) = non_blank(cage) {
        keys.push(format!("cage:{}", cage.to_ascii_uppercase()));
    }
    if let Some(duns) = non_blank(duns) {
        keys.push(format!("duns:{}", duns.to_ascii_uppercase()));
    }
    keys
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Output of a full detection run.
#[derive(Debug)]
pub struct DetectionRun {
    /// Flat detection sequence, exact (award, contract) duplicates merged.
    pub detections: Vec<Detection>,
    pub summary: DetectionRunSummary,
}

/// Run-level counters and instrumentation.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionRunSummary {
    pub awards_processed: u64,
    pub contracts_in_table: u64,
    pub candidates_scored: u64,
    /// Record-level skips (malformed awards/contracts), the host's
    /// per-run warning count.
    pub malformed_skipped: u32,
    pub detections_emitted: u64,
    pub chunk_count: u64,
    pub total_time_ms: u64,
    pub throughput: DetectionThroughput,
    /// Per-phase instrumentation, flattened for export.
    pub operations: FxHashMap<String, f64>,
}

/// End-to-end detection over award/contract snapshots.
pub struct DetectionPipeline {
    detector: TransitionDetector,
    config: TransitionConfig,
}

impl DetectionPipeline {
    /// Validates the configuration fail-fast before anything is built.
    pub fn new(config: TransitionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            detector: TransitionDetector::new(config.clone()),
            config,
        })
    }

    /// Run detection sequentially.
    pub fn run(
        &self,
        awards: &[Award],
        contracts: &[Contract],
        patents: &[AwardPatent],
    ) -> Result<DetectionRun, BatchError> {
        self.execute(awards, contracts, patents, false)
    }

    /// Run detection with chunks fanned out across the bounded worker pool.
    pub fn run_parallel(
        &self,
        awards: &[Award],
        contracts: &[Contract],
        patents: &[AwardPatent],
    ) -> Result<DetectionRun, BatchError> {
        self.execute(awards, contracts, patents, true)
    }

    fn execute(
        &self,
        awards: &[Award],
        contracts: &[Contract],
        patents: &[AwardPatent],
        parallel: bool,
    ) -> Result<DetectionRun, BatchError> {
        let run_start = Instant::now();
        let mut monitor = PerfMonitor::new();

        let index_handle = monitor.start("index");
        let index = ContractIndex::build(contracts, self.detector.resolver());
        let patents_by_award = group_patents(patents);
        monitor.end(index_handle, contracts.len() as u64);

        let threshold = self.config.detection.score_threshold;
        let chunk_size = self.config.detection.chunk_size;
        let detect_handle = monitor.start("detect");

        let process = |_index: usize, chunk: &[Award]| -> Result<ChunkOutcome, DetectionError> {
            let mut outcome = ChunkOutcome::default();
            for award in chunk {
                let candidates = index.candidates_for(award, self.detector.resolver());
                let award_patents = patents_by_award
                    .get(award.award_id.as_str())
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                let result =
                    self.detector
                        .detect_for_award(award, &candidates, award_patents, threshold);
                outcome.candidates_scored += result.candidates_scored as u64;
                outcome.malformed_skipped += result.malformed_skipped;
                outcome.detections.extend(result.detections);
            }
            Ok(outcome)
        };

        let outcomes = if parallel {
            batch::run_chunked_parallel(
                awards,
                chunk_size,
                self.config.detection.max_workers,
                process,
            )?
        } else {
            batch::run_chunked(awards, chunk_size, process)?
        };

        let chunk_count = outcomes.len() as u64;
        let mut candidates_scored = 0u64;
        let mut malformed_skipped = 0u32;
        let mut detections = Vec::new();
        for outcome in outcomes {
            candidates_scored += outcome.candidates_scored;
            malformed_skipped += outcome.malformed_skipped;
            detections.extend(outcome.detections);
        }
        let detections = merge_exact_duplicates(detections);
        monitor.end(detect_handle, detections.len() as u64);

        let total_time_ms = run_start.elapsed().as_millis() as u64;
        let throughput = perf::profile_detection_performance(
            awards.len() as u64,
            contracts.len() as u64,
            detections.len() as u64,
            total_time_ms,
            self.config.perf.target_detections_per_minute,
        );

        let summary = DetectionRunSummary {
            awards_processed: awards.len() as u64,
            contracts_in_table: contracts.len() as u64,
            candidates_scored,
            malformed_skipped,
            detections_emitted: detections.len() as u64,
            chunk_count,
            total_time_ms,
            throughput,
            operations: monitor.to_flat_map(),
        };
        info!(
            awards = summary.awards_processed,
            detections = summary.detections_emitted,
            skipped = summary.malformed_skipped,
            elapsed_ms = summary.total_time_ms,
            "detection run complete"
        );

        Ok(DetectionRun {
            detections,
            summary,
        })
    }
}

#[derive(Debug, Default)]
struct ChunkOutcome {
    detections: Vec<Detection>,
    candidates_scored: u64,
    malformed_skipped: u32,
}

fn group_patents(patents: &[AwardPatent]) -> FxHashMap<String, Vec<AwardPatent>> {
    let mut map: FxHashMap<String, Vec<AwardPatent>> = FxHashMap::default();
    for patent in patents {
        map.entry(patent.award_id.trim().to_string())
            .or_default()
            .push(patent.clone());
    }
    map
}

/// Merge exact (award_id, contract_id) duplicates, keeping the higher
/// score. Duplicate award rows in the input are the usual cause.
fn merge_exact_duplicates(detections: Vec<Detection>) -> Vec<Detection> {
    let mut best: FxHashMap<(String, String), Detection> = FxHashMap::default();
    let mut order: Vec<(String, String)> = Vec::new();
    for detection in detections {
        let key = (detection.award_id.clone(), detection.contract_id.clone());
        let (seen, replace) = match best.get(&key) {
            Some(existing) => (true, detection.score > existing.score),
            None => (false, true),
        };
        if !seen {
            order.push(key.clone());
        }
        if replace {
            best.insert(key, detection);
        }
    }
    order
        .into_iter()
        .filter_map(|key| best.remove(&key))
        .collect()
}
