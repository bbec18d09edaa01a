//! Chunked batch execution.
//!
//! Two failure policies, chosen explicitly at each call site:
//! `tolerate_record` skips and counts a record-level error, while
//! `propagate_chunk` promotes an error to `BatchError` and aborts the run.
//! There is no third, ad-hoc policy.

use rayon::prelude::*;
use tracing::warn;

use followon_core::errors::{BatchError, DetectionError};

/// Run `f` over fixed-size chunks sequentially. The first failing chunk
/// aborts the run.
pub fn run_chunked<T, R, F>(items: &[T], chunk_size: usize, f: F) -> Result<Vec<R>, BatchError>
where
    F: Fn(usize, &[T]) -> Result<R, DetectionError>,
{
    items
        .chunks(chunk_size.max(1))
        .enumerate()
        .map(|(index, chunk)| propagate_chunk(index, f(index, chunk)))
        .collect()
}

/// Run `f` over fixed-size chunks on a bounded worker pool.
///
/// Results keep chunk order. Workers only read shared inputs; a failing
/// chunk aborts the run and no partial result is returned.
pub fn run_chunked_parallel<T, R, F>(
    items: &[T],
    chunk_size: usize,
    max_workers: usize,
    f: F,
) -> Result<Vec<R>, BatchError>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &[T]) -> Result<R, DetectionError> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_workers.max(1))
        .build()
        .map_err(|e| BatchError::PoolBuild(e.to_string()))?;

    let chunks: Vec<&[T]> = items.chunks(chunk_size.max(1)).collect();
    pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(index, chunk)| propagate_chunk(index, f(index, chunk)))
            .collect()
    })
}

/// Record-level policy: log, count, continue.
pub fn tolerate_record<T>(result: Result<T, DetectionError>, skipped: &mut u32) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "skipping malformed record");
            *skipped += 1;
            None
        }
    }
}

/// Chunk-level policy: promote to `BatchError` naming the failing chunk.
pub fn propagate_chunk<R>(
    chunk_index: usize,
    result: Result<R, DetectionError>,
) -> Result<R, BatchError> {
    result.map_err(|source| BatchError::ChunkFailed {
        chunk_index,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_chunked_preserves_order() {
        let items: Vec<u32> = (0..10).collect();
        let sums = run_chunked(&items, 3, |_, chunk| Ok(chunk.iter().sum::<u32>())).unwrap();
        assert_eq!(sums, vec![3, 12, 21, 9]);
    }

    #[test]
    fn test_chunk_failure_aborts_and_names_chunk() {
        let items: Vec<u32> = (0..10).collect();
        let result = run_chunked(&items, 3, |index, chunk| {
            if index == 2 {
                Err(DetectionError::malformed("r", "boom"))
            } else {
                Ok(chunk.len())
            }
        });
        match result {
            Err(BatchError::ChunkFailed { chunk_index, .. }) => assert_eq!(chunk_index, 2),
            other => panic!("expected ChunkFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let items: Vec<u64> = (0..1000).collect();
        let f = |_: usize, chunk: &[u64]| Ok(chunk.iter().sum::<u64>());
        let sequential = run_chunked(&items, 64, f).unwrap();
        let parallel = run_chunked_parallel(&items, 64, 4, f).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_failure_propagates() {
        let items: Vec<u64> = (0..100).collect();
        let result = run_chunked_parallel(&items, 10, 4, |index, _| {
            if index == 5 {
                Err(DetectionError::malformed("r", "boom"))
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(BatchError::ChunkFailed { .. })));
    }

    #[test]
    fn test_tolerate_record_counts_skips() {
        let mut skipped = 0;
        let ok: Option<u32> = tolerate_record(Ok(1), &mut skipped);
        let err: Option<u32> =
            tolerate_record(Err(DetectionError::malformed("r", "bad")), &mut skipped);
        assert_eq!(ok, Some(1));
        assert_eq!(err, None);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let items: Vec<u32> = Vec::new();
        let result = run_chunked(&items, 8, |_, chunk| Ok(chunk.len())).unwrap();
        assert!(result.is_empty());
    }
}
