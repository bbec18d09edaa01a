//! # followon-detect
//!
//! The detection engine: resolves vendor identities, scores
//! (award, contract) pairs, and emits `Detection` records for pairs that
//! clear the configured threshold.
//!
//! Hot-path layering keeps cost bounded: cheap window filtering first, then
//! identity resolution, then the full composite score — only survivors of
//! each stage reach the next. The batch pipeline fans awards out across a
//! bounded rayon pool; workers share read-only inputs and never mutate
//! shared state.

pub mod detector;
pub mod pipeline;
pub mod resolver;
pub mod scoring;

pub use detector::{AwardDetectionResult, TransitionDetector};
pub use pipeline::{DetectionPipeline, DetectionRun, DetectionRunSummary};
pub use resolver::{CanonicalVendorKey, EntityResolver, MatchStrength};
pub use scoring::{ScoreBreakdown, ScoringEngine};
