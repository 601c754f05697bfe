//! CLI command implementations

use crate::config::CliConfig;
use crate::output::ReportFormat;
use anyhow::Result;
use clap::{Args, Subcommand};
use fsplit_core::Config;
use std::path::PathBuf;

pub mod generate_config;
pub mod merge;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a file into a number of equally sized chunk files
    #[command(visible_alias = "s")]
    Split(split::SplitArgs),

    /// Merge chunk files from a directory back into one file
    #[command(visible_alias = "m")]
    Merge(merge::MergeArgs),

    /// Write a configuration file template with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(global),
            Commands::Merge(args) => args.execute(global),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file
    #[arg(long, value_name = "FILE", env = "FSPLIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Report format (default: from configuration, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<ReportFormat>,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Report format after applying the configuration file default
    pub fn report_format(&self, settings: &CliConfig) -> ReportFormat {
        self.format.unwrap_or(settings.output.format)
    }

    /// Whether a progress bar should be drawn
    pub fn show_progress(&self, settings: &CliConfig) -> bool {
        !self.quiet && settings.output.progress
    }
}

/// Block size options shared by split and merge
#[derive(Debug, Clone, Default, Args)]
pub struct TransferArgs {
    /// Bytes to read and write at a time (non-positive values are ignored)
    #[arg(
        short,
        long,
        value_name = "BYTES",
        env = "FSPLIT_BLOCK_SIZE",
        allow_hyphen_values = true
    )]
    pub block_size: Option<i64>,
}

impl TransferArgs {
    /// Build the transfer configuration: command line over configuration
    /// file over built-in default
    pub fn resolve(&self, settings: &CliConfig) -> Config {
        let mut config = Config::default();
        config.set_block_size(settings.transfer.block_size);
        if let Some(block_size) = self.block_size {
            config.set_block_size(block_size);
        }
        config
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
