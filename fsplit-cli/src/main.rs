//! Command-line entry point for fsplit

use clap::Parser;
use fsplit_cli::commands::{init_logging, Commands, GlobalArgs};
use fsplit_cli::exit_code;

/// Split a file into equally sized chunk files and merge them back
#[derive(Debug, Parser)]
#[command(name = "fsplit", version, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet);

    if let Err(err) = cli.command.execute(&cli.global) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}
