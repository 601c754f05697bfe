//! Error types for split and merge operations

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a failure, used by callers to map errors to
/// exit codes or user-facing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter is out of range (chunk count, missing values)
    InvalidArgument,
    /// A path does not have the required shape or cannot be prepared
    InvalidPath,
    /// The block size does not fit inside the computed chunk size
    ConfigurationConflict,
    /// An underlying read, write, open or create failed
    IoFailure,
}

/// Errors produced by the splitter and merger
#[derive(Error, Debug)]
pub enum FsplitError {
    /// Invalid argument
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// Invalid path
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// Block size larger than the chunk size
    #[error(
        "input file size / number of chunks ({chunk_size}) must not be smaller than block size ({block_size})"
    )]
    ConfigurationConflict {
        /// Configured block size in bytes
        block_size: usize,
        /// Computed chunk size in bytes
        chunk_size: u64,
    },

    /// I/O failure on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written when the failure happened
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
}

impl FsplitError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsplitError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            FsplitError::InvalidPath { .. } => ErrorKind::InvalidPath,
            FsplitError::ConfigurationConflict { .. } => ErrorKind::ConfigurationConflict,
            FsplitError::Io { .. } => ErrorKind::IoFailure,
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        FsplitError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        FsplitError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsplitError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for split and merge operations
pub type Result<T> = std::result::Result<T, FsplitError>;
