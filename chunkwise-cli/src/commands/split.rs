//! Split command implementation

use super::{init_logging, ChunkingArgs};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chunks under marker lines
    Text,
    /// JSON array of documents with chunk metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting chunking");
        log::debug!("Arguments: {:?}", self);

        let (config, chunker) = self.chunking.resolve()?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    config.output.default_format
                ))
            })?,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => {
                Box::new(MarkdownFormatter::new(writer, config.output.preview_len))
            }
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            let source = file.display().to_string();
            let size = FileReader::file_size(file)?;
            log::debug!("Reading {source} ({size} bytes)");

            let text = FileReader::read_text(file)?;
            let result = chunker.split(&text);
            log::info!(
                "{source}: {} chunks, ~{} of ~{} tokens",
                result.total_chunks,
                result.total_tokens_estimate,
                result.original_tokens_estimate
            );
            if result.truncated {
                log::warn!(
                    "{source}: truncated to {} chunks",
                    chunker.config().max_chunks
                );
            }

            formatter.format_document(&source, &result)?;
            progress.file_completed(&source);
        }

        progress.finish();
        formatter.finish()?;

        log::info!("Chunking complete");
        Ok(())
    }
}
