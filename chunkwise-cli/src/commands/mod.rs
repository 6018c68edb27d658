//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliResult;
use anyhow::Result;
use chunkwise_core::{Chunker, ChunkerConfig};
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod estimate;
pub mod extract;
pub mod generate_config;
pub mod prompt;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into token-bounded chunks
    Split(split::SplitArgs),

    /// Estimate token counts and chunk counts without splitting
    Estimate(estimate::EstimateArgs),

    /// Print the summary prompt plan for a document as JSON
    Prompt(prompt::PromptArgs),

    /// Extract the summary text from a model reply
    Extract(extract::ExtractArgs),

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Estimate(args) => args.execute(),
            Commands::Prompt(args) => args.execute(),
            Commands::Extract(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Formats => list_formats(),
                }
                Ok(())
            }
        }
    }
}

fn list_formats() {
    println!("Available output formats:");
    println!("  text     - Each chunk under a marker line with its span and token estimate");
    println!("  json     - JSON array of documents with chunk metadata");
    println!("  markdown - Markdown table of chunks with text previews");
}

/// Chunking options shared by every command that splits text
#[derive(Debug, Default, Args)]
pub struct ChunkingArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Token budget per chunk
    #[arg(long, value_name = "N", env = "CHUNKWISE_MAX_CHUNK_TOKENS")]
    pub max_chunk_tokens: Option<usize>,

    /// Maximum number of chunks kept per document (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_chunks: Option<usize>,

    /// Tokens repeated from the end of one chunk at the start of the next
    #[arg(long, value_name = "N")]
    pub overlap_tokens: Option<usize>,

    /// Cut fixed-size windows instead of keeping paragraphs whole
    #[arg(long)]
    pub no_preserve_paragraphs: bool,

    /// Paragraph separator; accepts \n and \t escapes
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,
}

impl ChunkingArgs {
    /// Load the configuration file and build a chunker with flags applied on top
    pub fn resolve(&self) -> Result<(CliConfig, Chunker)> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        self.apply(&mut config.chunking);
        log::debug!("Chunking configuration: {:?}", config.chunking);

        let chunker = Chunker::new(config.chunking.clone()).map_err(crate::CliError::from)?;
        Ok((config, chunker))
    }

    fn apply(&self, chunking: &mut ChunkerConfig) {
        if let Some(tokens) = self.max_chunk_tokens {
            chunking.max_chunk_tokens = tokens;
        }
        if let Some(count) = self.max_chunks {
            chunking.max_chunks = count;
        }
        if let Some(tokens) = self.overlap_tokens {
            chunking.overlap_tokens = tokens;
        }
        if self.no_preserve_paragraphs {
            chunking.preserve_paragraphs = false;
        }
        if let Some(separator) = &self.separator {
            chunking.paragraph_separator = unescape_separator(separator);
        }
    }
}

/// Expand `\n`, `\r`, `\t` and `\\` so separators can be typed on a shell
fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
