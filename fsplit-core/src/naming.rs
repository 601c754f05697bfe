//! Chunk file naming convention
//!
//! Chunk files are named `chunk-%03d.fsplit` with a zero-based index.
//! Reconstruction order comes from the index alone, never from directory
//! listing order.

use std::path::{Path, PathBuf};

/// Prefix shared by every chunk file name
pub const CHUNK_PREFIX: &str = "chunk-";

/// Extension shared by every chunk file name
pub const CHUNK_SUFFIX: &str = ".fsplit";

/// Largest number of chunks whose indices fit the three-digit width
pub const MAX_CHUNKS: usize = 1000;

/// File name of the chunk at `index`
pub fn chunk_file_name(index: usize) -> String {
    format!("{CHUNK_PREFIX}{index:03}{CHUNK_SUFFIX}")
}

/// Path of the chunk at `index` inside `dir`
pub fn chunk_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(chunk_file_name(index))
}

/// Whether `name` follows the chunk naming convention.
///
/// Only the prefix and suffix are checked; the digits in between are not.
pub fn is_chunk_file_name(name: &str) -> bool {
    name.starts_with(CHUNK_PREFIX) && name.ends_with(CHUNK_SUFFIX)
}
