//! Token-bounded text chunking for language-model context windows
//!
//! This crate splits long plain text into an ordered sequence of chunks, each
//! small enough for a downstream model's context window. Chunk sizes are
//! measured with a coarse character heuristic (see [`estimate_tokens`]), so the
//! engine never needs a model-specific tokenizer.
//!
//! Two strategies are available:
//! - **Paragraph-preserving**: chunks end on paragraph separators and a
//!   paragraph is never divided, even when it alone exceeds the budget.
//! - **Fixed-window**: chunks are exact byte windows, optionally overlapping.
//!
//! Both strategies are followed by a global chunk-count ceiling.
//!
//! # Example
//!
//! ```rust
//! use chunkwise_core::{Chunker, ChunkerConfig};
//!
//! let config = ChunkerConfig::builder()
//!     .max_chunk_tokens(25)
//!     .preserve_paragraphs(false)
//!     .build()
//!     .unwrap();
//! let chunker = Chunker::new(config).unwrap();
//!
//! let text = "x".repeat(200);
//! let result = chunker.split(&text);
//!
//! assert_eq!(result.total_chunks, 2);
//! assert_eq!(result.chunks[0].text.len(), 100);
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod chunker;
pub mod config;
pub mod error;
pub mod estimator;
pub mod prompt;
pub mod truncate;

// Re-export key types
pub use chunk::{chunks_to_strings, ChunkResult, ChunkerResult};
pub use chunker::Chunker;
pub use config::{ChunkerConfig, ChunkerConfigBuilder};
pub use error::{ChunkError, PromptError, Result};
pub use estimator::{estimate_tokens, CHARS_PER_TOKEN};
pub use prompt::{extract_summary_content, PromptMessage, PromptPlan, PromptTemplates, Role};
pub use truncate::{truncate_text, truncate_with_ellipsis};
