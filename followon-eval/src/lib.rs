//! # followon-eval
//!
//! Measures detection quality against curated ground truth: confusion
//! matrix, precision/recall/F1, a per-confidence-band breakdown, and a
//! narrative report for human review.
//!
//! Every entry point is a total function: well-typed but degenerate input
//! (empty detections, empty truth) resolves to explicit zero values, never
//! an error.

pub mod evaluator;
pub mod report;
pub mod types;

pub use evaluator::evaluate;
pub use report::ReportStatus;
pub use types::{BandBreakdown, EvalOptions, EvaluationResult};
