//! Chunker configuration

use crate::error::{ChunkError, Result};

/// Default configuration constants
pub mod defaults {
    /// Default token ceiling per chunk
    pub const MAX_CHUNK_TOKENS: usize = 20_000;

    /// Default ceiling on the number of chunks
    pub const MAX_CHUNKS: usize = 10;

    /// Default overlap between adjacent chunks, in tokens
    pub const OVERLAP_TOKENS: usize = 0;

    /// Default paragraph delimiter
    pub const PARAGRAPH_SEPARATOR: &str = "\n\n";
}

/// Chunking configuration
///
/// Fields are public so callers can fill the struct directly, but a
/// [`Chunker`](crate::Chunker) only accepts a configuration that passes
/// [`ChunkerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkerConfig {
    /// Ceiling on estimated tokens per chunk (must be at least 1)
    pub max_chunk_tokens: usize,

    /// Ceiling on the number of chunks, `0` for unlimited
    pub max_chunks: usize,

    /// Estimated tokens of trailing content repeated at the start of the next chunk
    pub overlap_tokens: usize,

    /// Keep paragraphs whole instead of cutting fixed windows
    pub preserve_paragraphs: bool,

    /// Paragraph delimiter; empty means the default double newline
    pub paragraph_separator: String,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_tokens: defaults::MAX_CHUNK_TOKENS,
            max_chunks: defaults::MAX_CHUNKS,
            overlap_tokens: defaults::OVERLAP_TOKENS,
            preserve_paragraphs: true,
            paragraph_separator: defaults::PARAGRAPH_SEPARATOR.to_string(),
        }
    }
}

impl ChunkerConfig {
    /// Create a configuration builder
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::default()
    }

    /// Paragraph-preserving preset with no chunk limit
    pub fn paragraphs(max_chunk_tokens: usize) -> Self {
        Self {
            max_chunk_tokens,
            max_chunks: 0,
            ..Default::default()
        }
    }

    /// Fixed-window preset with no chunk limit
    pub fn fixed_window(max_chunk_tokens: usize) -> Self {
        Self {
            max_chunk_tokens,
            max_chunks: 0,
            preserve_paragraphs: false,
            ..Default::default()
        }
    }

    /// The separator actually used for splitting
    pub fn separator(&self) -> &str {
        if self.paragraph_separator.is_empty() {
            defaults::PARAGRAPH_SEPARATOR
        } else {
            &self.paragraph_separator
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_tokens == 0 {
            return Err(ChunkError::InvalidConfig {
                reason: "max_chunk_tokens must be greater than 0".to_string(),
            });
        }

        if !self.preserve_paragraphs && self.overlap_tokens >= self.max_chunk_tokens {
            return Err(ChunkError::InvalidConfig {
                reason: format!(
                    "overlap_tokens ({}) must be less than max_chunk_tokens ({}) for fixed windows",
                    self.overlap_tokens, self.max_chunk_tokens
                ),
            });
        }

        Ok(())
    }
}

/// Fluent builder for [`ChunkerConfig`]
#[derive(Debug, Default)]
pub struct ChunkerConfigBuilder {
    max_chunk_tokens: Option<usize>,
    max_chunks: Option<usize>,
    overlap_tokens: Option<usize>,
    preserve_paragraphs: Option<bool>,
    paragraph_separator: Option<String>,
}

impl ChunkerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token ceiling per chunk
    pub fn max_chunk_tokens(mut self, tokens: usize) -> Self {
        self.max_chunk_tokens = Some(tokens);
        self
    }

    /// Set the chunk count ceiling (`0` = unlimited)
    pub fn max_chunks(mut self, count: usize) -> Self {
        self.max_chunks = Some(count);
        self
    }

    /// Set the overlap between chunks in tokens
    pub fn overlap_tokens(mut self, tokens: usize) -> Self {
        self.overlap_tokens = Some(tokens);
        self
    }

    /// Choose between the paragraph and fixed-window strategies
    pub fn preserve_paragraphs(mut self, preserve: bool) -> Self {
        self.preserve_paragraphs = Some(preserve);
        self
    }

    /// Set the paragraph separator
    pub fn paragraph_separator(mut self, separator: impl Into<String>) -> Self {
        self.paragraph_separator = Some(separator.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ChunkerConfig> {
        let mut config = ChunkerConfig::default();

        if let Some(tokens) = self.max_chunk_tokens {
            config.max_chunk_tokens = tokens;
        }
        if let Some(count) = self.max_chunks {
            config.max_chunks = count;
        }
        if let Some(tokens) = self.overlap_tokens {
            config.overlap_tokens = tokens;
        }
        if let Some(preserve) = self.preserve_paragraphs {
            config.preserve_paragraphs = preserve;
        }
        if let Some(separator) = self.paragraph_separator {
            config.paragraph_separator = separator;
        }
        if config.paragraph_separator.is_empty() {
            config.paragraph_separator = defaults::PARAGRAPH_SEPARATOR.to_string();
        }

        config.validate()?;
        Ok(config)
    }
}
