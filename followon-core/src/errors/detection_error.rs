//! Detection errors.

use super::error_code::{self, FollowonErrorCode};

/// Errors raised for individual records during detection.
///
/// These are record-level: the detector logs and skips them. They abort a
/// run only when a batch helper explicitly promotes them to `BatchError`.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Malformed record {record_id}: {reason}")]
    MalformedRecord { record_id: String, reason: String },

    #[error("Award {award_id} has no usable reference date")]
    MissingReferenceDate { award_id: String },
}

impl DetectionError {
    pub fn malformed(record_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record_id: record_id.into(),
            reason: reason.into(),
        }
    }
}

impl FollowonErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
