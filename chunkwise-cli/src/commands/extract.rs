//! Extract command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use chunkwise_core::extract_summary_content;
use clap::Args;
use std::io;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// File holding the model reply (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        let reply = match &self.input {
            Some(path) => FileReader::read_text(path)?,
            None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
        };

        let content = extract_summary_content(&reply).map_err(CliError::from)?;
        println!("{content}");
        Ok(())
    }
}
