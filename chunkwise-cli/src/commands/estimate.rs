//! Estimate command implementation

use super::{init_logging, ChunkingArgs};
use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;
use chunkwise_core::estimate_tokens;
use clap::Args;

/// Arguments for the estimate command
#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EstimateArgs {
    /// Execute the estimate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let (_, chunker) = self.chunking.resolve()?;
        let files = resolve_patterns(&self.input)?;

        for file in &files {
            let text = FileReader::read_text(file)?;
            println!(
                "{}: {} bytes, ~{} tokens, {} chunks",
                file.display(),
                text.len(),
                estimate_tokens(&text),
                chunker.estimate_chunk_count(&text)
            );
        }

        Ok(())
    }
}
