//! Progress hooks for long-running transfers

use crate::summary::ChunkSpec;

/// Receives per-chunk progress from the splitter and merger.
///
/// All methods default to doing nothing so implementors only override what
/// they display.
pub trait TransferObserver {
    /// A split is about to start writing chunks
    fn split_started(&mut self, _spec: &ChunkSpec, _block_size: usize) {}

    /// A merge is about to start reading `_total` chunks
    fn merge_started(&mut self, _total: usize, _block_size: usize) {}

    /// Work on chunk `_index` (zero-based) of `_total` has begun
    fn chunk_started(&mut self, _index: usize, _total: usize) {}

    /// Chunk `_index` was closed after moving `_bytes` bytes
    fn chunk_finished(&mut self, _index: usize, _bytes: u64) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TransferObserver for NoopObserver {}
