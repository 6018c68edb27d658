//! Prompt command implementation

use super::{init_logging, ChunkingArgs};
use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use chunkwise_core::PromptPlan;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the prompt command
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Input document
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PromptArgs {
    /// Execute the prompt command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let (config, chunker) = self.chunking.resolve()?;
        let text = FileReader::read_text(&self.input)?;
        let result = chunker.split(&text);

        let plan = PromptPlan::from_result(&config.prompt, &result).map_err(CliError::from)?;
        log::info!(
            "{} chunk messages, ~{} prompt tokens",
            plan.chunk_message_count(),
            plan.estimated_prompt_tokens()
        );

        let json = if self.compact || !config.output.pretty_json {
            serde_json::to_string(&plan)?
        } else {
            serde_json::to_string_pretty(&plan)?
        };

        match &self.output {
            Some(path) => fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => println!("{json}"),
        }

        Ok(())
    }
}
