//! Error handling for Followon.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The evaluator and the analytics aggregator are total functions and
//! define no error type: degenerate input resolves to explicit zero/empty
//! values there.

pub mod batch_error;
pub mod config_error;
pub mod detection_error;
pub mod error_code;

pub use batch_error::BatchError;
pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::FollowonErrorCode;
