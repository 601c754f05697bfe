//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use fsplit_core::{MergeSummary, SplitOutcome, SplitSummary};
use std::io::{self, Write};
use std::path::Path;

/// Plain text formatter - one `[+]` line per fact
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_split(&mut self, source: &Path, dest: &Path, summary: &SplitSummary) -> Result<()> {
        writeln!(self.writer, "[+] Input file: {}", source.display())?;
        writeln!(self.writer, "[+] Output directory: {}", dest.display())?;
        writeln!(self.writer, "[+] Number of chunks: {}", summary.spec.chunk_count)?;
        writeln!(self.writer, "[+] Chunk size: {}", summary.spec.chunk_size)?;
        writeln!(self.writer, "[+] Block size: {}", summary.block_size)?;
        writeln!(
            self.writer,
            "[+] Chunks written: {} ({} bytes)",
            summary.chunks_written, summary.bytes_written
        )?;
        if summary.outcome == SplitOutcome::ExhaustedEarly {
            writeln!(
                self.writer,
                "[-] Input ended after {} of {} chunks",
                summary.chunks_written, summary.spec.chunk_count
            )?;
        }
        writeln!(self.writer, "[+] Operation completed!")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_merge(&mut self, source: &Path, dest: &Path, summary: &MergeSummary) -> Result<()> {
        writeln!(self.writer, "[+] Input directory: {}", source.display())?;
        writeln!(self.writer, "[+] Output file: {}", dest.display())?;
        writeln!(self.writer, "[+] Block size: {}", summary.block_size)?;
        if summary.chunks_merged == 0 {
            writeln!(self.writer, "[-] No file to merge!")?;
        } else {
            writeln!(
                self.writer,
                "[+] Chunks merged: {} ({} bytes)",
                summary.chunks_merged, summary.bytes_written
            )?;
        }
        writeln!(self.writer, "[+] Operation completed!")?;
        self.writer.flush()?;
        Ok(())
    }
}
