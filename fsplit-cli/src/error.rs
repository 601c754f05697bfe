//! Error handling for the CLI application

use fsplit_core::{ErrorKind, FsplitError};
use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file missing or malformed
    ConfigError(String),
    /// Refusing to overwrite an existing file
    OutputExists(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputExists(path) => {
                write!(f, "Output file already exists: {path} (use --force to overwrite)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Process exit code for a failed command
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(err) = error.downcast_ref::<FsplitError>() {
        return match err.kind() {
            ErrorKind::InvalidArgument => 2,
            ErrorKind::InvalidPath => 3,
            ErrorKind::ConfigurationConflict => 4,
            ErrorKind::IoFailure => 5,
        };
    }

    match error.downcast_ref::<CliError>() {
        Some(CliError::ConfigError(_)) => 2,
        _ => 1,
    }
}
