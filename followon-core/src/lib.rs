//! # followon-core
//!
//! Core types, configuration model, error taxonomy, and tracing setup for
//! the Followon transition-detection engine.
//!
//! Everything downstream (detection, evaluation, analytics) depends on this
//! crate and nothing here depends on them. Awards and contracts are
//! immutable run inputs; detections and every report derived from them are
//! read-only artifacts of a single run. Persistence belongs to the host.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::TransitionConfig;
pub use errors::{BatchError, ConfigError, DetectionError};
pub use types::{
    Award, AwardPatent, CompanyId, ConfidenceBand, ConfusionMatrix, Contract, Detection,
    DetectionMethod, GroundTruthTransition, Phase,
};
