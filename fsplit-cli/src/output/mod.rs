//! Report formatting module

use anyhow::Result;
use fsplit_core::{MergeSummary, SplitSummary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Report a finished split
    fn write_split(&mut self, source: &Path, dest: &Path, summary: &SplitSummary) -> Result<()>;

    /// Report a finished merge
    fn write_merge(&mut self, source: &Path, dest: &Path, summary: &MergeSummary) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary lines
    #[default]
    Text,
    /// JSON object with the operation summary
    Json,
}

/// Formatter for `format` writing to stdout
pub fn stdout_formatter(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Text => Box::new(TextFormatter::stdout()),
        ReportFormat::Json => Box::new(JsonFormatter::stdout()),
    }
}
