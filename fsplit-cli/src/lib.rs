//! fsplit CLI library
//!
//! This library provides the command-line interface for splitting files
//! into chunk files and merging them back.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{exit_code, CliError};
