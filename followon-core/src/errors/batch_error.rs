//! Batch execution errors — a failed chunk aborts the whole run.
//!
//! Partial detection sets are never published: the host either gets the
//! full run output or an error naming the failing chunk.

use super::detection_error::DetectionError;
use super::error_code::{self, FollowonErrorCode};

/// Errors raised by the chunked batch executor.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Chunk {chunk_index} failed: {source}")]
    ChunkFailed {
        chunk_index: usize,
        #[source]
        source: DetectionError,
    },

    #[error("Worker pool construction failed: {0}")]
    PoolBuild(String),
}

impl FollowonErrorCode for BatchError {
    fn error_code(&self) -> &'static str {
        error_code::BATCH_ERROR
    }
}
