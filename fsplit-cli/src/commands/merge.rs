//! Merge command implementation

use super::{GlobalArgs, TransferArgs};
use crate::config::CliConfig;
use crate::output::stdout_formatter;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the merge command
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Directory containing the chunk files
    #[arg(short, long, value_name = "DIR")]
    pub source: PathBuf,

    /// File to write the merged content to
    #[arg(short, long, value_name = "FILE")]
    pub dest: PathBuf,

    #[command(flatten)]
    pub transfer: TransferArgs,
}

impl MergeArgs {
    /// Execute the merge command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let settings = CliConfig::load(global.config.as_deref())?;
        let config = self.transfer.resolve(&settings);

        log::info!(
            "Merging chunks from {} into {}",
            self.source.display(),
            self.dest.display()
        );

        let mut progress = ProgressReporter::new(!global.show_progress(&settings));
        let result =
            fsplit_core::merge_with_observer(&self.source, &self.dest, &config, &mut progress);
        match &result {
            Ok(_) => progress.finish(),
            Err(_) => progress.abandon("Failed"),
        }
        let summary = result?;

        stdout_formatter(global.report_format(&settings)).write_merge(
            &self.source,
            &self.dest,
            &summary,
        )
    }
}
