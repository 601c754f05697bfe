//! Split a file into equally sized chunk files and merge them back
//!
//! A split computes `chunk_size = total_size / chunk_count` and streams the
//! source through a fixed-size buffer into `chunk-000.fsplit`,
//! `chunk-001.fsplit`, and so on. The last chunk also receives the bytes
//! left over by the integer division. A merge counts the chunk files in a
//! directory and concatenates them by index into one output file.
//!
//! Both operations are single-pass and blocking. The block size (bytes moved
//! per read/write call) is passed explicitly through [`Config`].
//!
//! # Example
//!
//! ```rust
//! use fsplit_core::{merge, split, Config};
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let source = dir.path().join("input.bin");
//! fs::write(&source, vec![42u8; 10_000]).unwrap();
//!
//! let config = Config::with_block_size(1000);
//! let chunks = dir.path().join("chunks");
//! let summary = split(&source, 4, &chunks, &config).unwrap();
//! assert_eq!(summary.chunks_written, 4);
//!
//! let restored = dir.path().join("restored.bin");
//! merge(&chunks, &restored, &config).unwrap();
//! assert_eq!(fs::read(&restored).unwrap(), fs::read(&source).unwrap());
//! ```

#![warn(missing_docs)]

mod buffer;
pub mod config;
pub mod error;
pub mod merger;
pub mod naming;
pub mod progress;
pub mod splitter;
pub mod summary;

pub use config::Config;
pub use error::{ErrorKind, FsplitError, Result};
pub use merger::{merge, merge_with_observer};
pub use progress::{NoopObserver, TransferObserver};
pub use splitter::{split, split_with_observer};
pub use summary::{ChunkSpec, MergeSummary, SplitOutcome, SplitSummary};
