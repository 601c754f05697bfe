//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use fsplit_core::{MergeSummary, SplitSummary};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

#[derive(Serialize)]
struct Report<'a, T> {
    operation: &'static str,
    source: &'a Path,
    destination: &'a Path,
    summary: &'a T,
}

/// JSON formatter - one pretty-printed object per report
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit<T: Serialize>(&mut self, report: &Report<'_, T>) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_split(&mut self, source: &Path, dest: &Path, summary: &SplitSummary) -> Result<()> {
        self.emit(&Report {
            operation: "split",
            source,
            destination: dest,
            summary,
        })
    }

    fn write_merge(&mut self, source: &Path, dest: &Path, summary: &MergeSummary) -> Result<()> {
        self.emit(&Report {
            operation: "merge",
            source,
            destination: dest,
            summary,
        })
    }
}
