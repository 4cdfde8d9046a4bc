//! codemix command-line entry point

use clap::Parser;
use codemix_cli::commands::Commands;
use codemix_cli::CliResult;

/// Code-switching NER error analysis and dialect transformation
#[derive(Debug, Parser)]
#[command(name = "codemix", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
