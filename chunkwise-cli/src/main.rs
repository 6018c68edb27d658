//! chunkwise command-line entry point

use chunkwise_cli::{commands::Commands, CliResult};
use clap::Parser;

/// Split long documents into token-bounded chunks
#[derive(Debug, Parser)]
#[command(name = "chunkwise", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
