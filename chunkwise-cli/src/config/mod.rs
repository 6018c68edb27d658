//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use chunkwise_core::{ChunkerConfig, PromptTemplates};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Summary prompt templates
    #[serde(default)]
    pub prompt: PromptTemplates,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Preview length for markdown output, in bytes
    pub preview_len: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            preview_len: 80,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
