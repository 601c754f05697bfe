//! Split command implementation

use super::{GlobalArgs, TransferArgs};
use crate::config::CliConfig;
use crate::output::stdout_formatter;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use fsplit_core::SplitOutcome;
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// File to split
    #[arg(short, long, value_name = "FILE")]
    pub source: PathBuf,

    /// Directory to write the chunk files to (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub dest: PathBuf,

    /// Number of chunks to create
    #[arg(short, long, value_name = "N")]
    pub chunks: usize,

    #[command(flatten)]
    pub transfer: TransferArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let settings = CliConfig::load(global.config.as_deref())?;
        let config = self.transfer.resolve(&settings);

        log::info!("Splitting {} into {} chunks", self.source.display(), self.chunks);
        log::debug!("Arguments: {:?}", self);

        let mut progress = ProgressReporter::new(!global.show_progress(&settings));
        let result = fsplit_core::split_with_observer(
            &self.source,
            self.chunks,
            &self.dest,
            &config,
            &mut progress,
        );
        match &result {
            Ok(summary) if summary.outcome == SplitOutcome::ExhaustedEarly => {
                progress.abandon("Source ended early")
            }
            Ok(_) => progress.finish(),
            Err(_) => progress.abandon("Failed"),
        }
        let summary = result?;

        stdout_formatter(global.report_format(&settings)).write_split(
            &self.source,
            &self.dest,
            &summary,
        )
    }
}
