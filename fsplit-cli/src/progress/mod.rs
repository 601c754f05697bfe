//! Progress reporting module

use fsplit_core::{ChunkSpec, TransferObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for chunk transfers
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    action: &'static str,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            action: "Processing",
        }
    }

    /// Initialize progress bar for `total_chunks` chunk files
    fn init_chunks(&mut self, total_chunks: u64, action: &'static str) {
        self.action = action;
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_chunks);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chunks {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Stop the bar where it stands, leaving `message` in place of "Complete"
    pub fn abandon(&self, message: &'static str) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon_with_message(message);
        }
    }
}

impl TransferObserver for ProgressReporter {
    fn split_started(&mut self, spec: &ChunkSpec, _block_size: usize) {
        self.init_chunks(spec.chunk_count as u64, "Creating");
    }

    fn merge_started(&mut self, total: usize, _block_size: usize) {
        self.init_chunks(total as u64, "Merging");
    }

    fn chunk_started(&mut self, index: usize, total: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{} file {} of {}...", self.action, index + 1, total));
        }
    }

    fn chunk_finished(&mut self, _index: usize, _bytes: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }
}
