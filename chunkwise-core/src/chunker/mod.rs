//! Chunking engine
//!
//! [`Chunker`] owns a validated [`ChunkerConfig`] and turns text into a
//! [`ChunkerResult`]. All working state lives in local accumulators, so one
//! chunker can serve any number of threads at once.

mod paragraph;
mod window;

use crate::{
    chunk::ChunkerResult,
    config::ChunkerConfig,
    error::Result,
    estimator::{estimate_tokens, tokens_to_bytes},
};
use tracing::debug;

/// Splits text into token-bounded chunks
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a chunker, rejecting configurations that could not terminate
    ///
    /// An empty paragraph separator is replaced by the default double newline.
    pub fn new(mut config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        config.paragraph_separator = config.separator().to_string();
        Ok(Self { config })
    }

    /// The configuration in effect
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split `text` into chunks
    ///
    /// Never fails: empty text yields an empty, non-truncated result.
    pub fn split(&self, text: &str) -> ChunkerResult {
        let original_tokens = estimate_tokens(text);
        if text.is_empty() {
            return ChunkerResult::default();
        }

        let overlap_bytes = tokens_to_bytes(self.config.overlap_tokens);
        let chunks = if self.config.preserve_paragraphs {
            debug!(
                bytes = text.len(),
                max_chunk_tokens = self.config.max_chunk_tokens,
                "splitting by paragraphs"
            );
            paragraph::split_paragraphs(
                text,
                &self.config.paragraph_separator,
                self.config.max_chunk_tokens,
                overlap_bytes,
            )
        } else {
            debug!(
                bytes = text.len(),
                max_chunk_tokens = self.config.max_chunk_tokens,
                "splitting by fixed windows"
            );
            window::split_windows(
                text,
                tokens_to_bytes(self.config.max_chunk_tokens),
                overlap_bytes,
            )
        };

        let produced = chunks.len();
        let result = ChunkerResult::assemble(chunks, self.config.max_chunks, original_tokens);
        if result.truncated {
            debug!(
                produced,
                kept = result.total_chunks,
                "chunk limit reached, dropping trailing chunks"
            );
        }

        result
    }

    /// Estimate how many chunks `text` would produce without splitting it
    ///
    /// A sizing hint for progress reporting. Paragraph boundaries and overlap
    /// both move the real count.
    pub fn estimate_chunk_count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }

        let total_tokens = estimate_tokens(text);
        let max_tokens = self.config.max_chunk_tokens;
        if total_tokens <= max_tokens {
            return 1;
        }

        let estimate = total_tokens.div_ceil(max_tokens);
        if self.config.max_chunks > 0 {
            estimate.min(self.config.max_chunks)
        } else {
            estimate
        }
    }
}

/// Largest char boundary at or before `pos`
fn floor_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut pos = pos;
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Smallest char boundary at or after `pos`
fn ceil_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut pos = pos;
    while !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}
