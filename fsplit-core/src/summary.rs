//! Plans and summaries describing split and merge runs

#[cfg(feature = "serde")]
use serde::Serialize;

/// Sizing derived from the source file for one split call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChunkSpec {
    /// Source file length in bytes
    pub total_size: u64,
    /// Number of chunks requested
    pub chunk_count: usize,
    /// Nominal size of every chunk; the last one also takes the remainder
    pub chunk_size: u64,
}

impl ChunkSpec {
    /// Compute the chunk size for a source of `total_size` bytes
    ///
    /// # Panics
    ///
    /// Panics if `chunk_count` is zero. [`crate::split`] rejects counts
    /// below 2 before building a `ChunkSpec`.
    pub fn new(total_size: u64, chunk_count: usize) -> Self {
        Self {
            total_size,
            chunk_count,
            chunk_size: total_size / chunk_count as u64,
        }
    }

    /// Whether `index` is the chunk that absorbs the remainder
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.chunk_count
    }

    /// Bytes the chunk at `index` is expected to hold when the source is
    /// read to completion
    #[cfg(test)]
    fn expected_len(&self, index: usize) -> u64 {
        if self.is_last(index) {
            self.total_size - self.chunk_size * (self.chunk_count as u64 - 1)
        } else {
            self.chunk_size
        }
    }
}

/// How a split run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitOutcome {
    /// Every requested chunk was filled
    Complete,
    /// The source ran out before the chunks were filled
    ExhaustedEarly,
}

/// Result of a split run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SplitSummary {
    /// Sizing used for the run
    pub spec: ChunkSpec,
    /// Block size used for every read/write call
    pub block_size: usize,
    /// Chunk files created, including a partial last one
    pub chunks_written: usize,
    /// Bytes written across all chunk files
    pub bytes_written: u64,
    /// Terminal state of the run
    pub outcome: SplitOutcome,
}

/// Result of a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MergeSummary {
    /// Chunk files concatenated into the output
    pub chunks_merged: usize,
    /// Bytes written to the output file
    pub bytes_written: u64,
    /// Block size used for every read/write call
    pub block_size: usize,
}
