//! Paragraph-preserving strategy

use super::ceil_char_boundary;
use crate::{
    chunk::ChunkResult,
    estimator::{estimate_tokens, CHARS_PER_TOKEN},
};
use tracing::trace;

/// Running state of the paragraph fold
struct Accumulator<'a> {
    separator: &'a str,
    max_tokens: usize,
    overlap_bytes: usize,
    chunks: Vec<ChunkResult>,
    buffer: String,
    /// Bytes at the front of `buffer` copied from the previous chunk
    seed_len: usize,
    /// A non-empty paragraph was added since the last chunk boundary
    has_paragraph: bool,
    chunk_start: usize,
    offset: usize,
}

impl<'a> Accumulator<'a> {
    fn new(separator: &'a str, max_tokens: usize, overlap_bytes: usize) -> Self {
        Self {
            separator,
            max_tokens,
            overlap_bytes,
            chunks: Vec::new(),
            buffer: String::new(),
            seed_len: 0,
            has_paragraph: false,
            chunk_start: 0,
            offset: 0,
        }
    }

    /// Token estimate of the buffer once `paragraph` is appended
    fn tokens_with(&self, paragraph: &str) -> usize {
        (self.buffer.len() + paragraph.len()) / CHARS_PER_TOKEN
    }

    fn push(mut self, paragraph: &str, is_last: bool) -> Self {
        if self.has_paragraph && self.tokens_with(paragraph) > self.max_tokens {
            self.finalize();
        }

        if estimate_tokens(paragraph) > self.max_tokens {
            trace!(
                offset = self.offset,
                bytes = paragraph.len(),
                "paragraph exceeds budget, keeping it whole"
            );
        }

        self.has_paragraph |= !paragraph.is_empty();
        self.buffer.push_str(paragraph);
        self.offset += paragraph.len();
        if !is_last {
            self.buffer.push_str(self.separator);
            self.offset += self.separator.len();
        }

        self
    }

    /// Close the buffer as a chunk and start the next one, seeded with overlap
    fn finalize(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let text = buffer.strip_suffix(self.separator).unwrap_or(&buffer);
        let trimmed = buffer.len() - text.len();

        self.chunks.push(ChunkResult {
            text: text.to_string(),
            index: self.chunks.len(),
            estimated_tokens: estimate_tokens(text),
            start_offset: self.chunk_start,
            end_offset: self.offset - trimmed,
        });

        self.seed_len = 0;
        self.has_paragraph = false;
        if self.overlap_bytes > 0 {
            let tail = overlap_tail(text, self.overlap_bytes);
            if !tail.is_empty() {
                self.buffer.push_str(tail);
                self.buffer.push_str(self.separator);
                self.seed_len = self.buffer.len();
            }
        }
        self.chunk_start = self.offset;
    }

    fn finish(mut self) -> Vec<ChunkResult> {
        if self.buffer.len() > self.seed_len {
            let text = std::mem::take(&mut self.buffer);
            self.chunks.push(ChunkResult {
                estimated_tokens: estimate_tokens(&text),
                index: self.chunks.len(),
                text,
                start_offset: self.chunk_start,
                end_offset: self.offset,
            });
        }
        self.chunks
    }
}

/// The last `overlap_bytes` of `text`, starting on a char boundary
fn overlap_tail(text: &str, overlap_bytes: usize) -> &str {
    if overlap_bytes >= text.len() {
        return text;
    }
    &text[ceil_char_boundary(text, text.len() - overlap_bytes)..]
}

/// Split on `separator`, packing whole paragraphs into chunks of at most
/// `max_tokens` each
///
/// A paragraph is added to the current chunk while the combined text stays
/// within budget. A paragraph larger than the budget becomes its own oversized
/// chunk. Boundaries are only placed after a chunk holds a non-empty paragraph.
pub(super) fn split_paragraphs(
    text: &str,
    separator: &str,
    max_tokens: usize,
    overlap_bytes: usize,
) -> Vec<ChunkResult> {
    let last = text.split(separator).count() - 1;

    text.split(separator)
        .enumerate()
        .fold(
            Accumulator::new(separator, max_tokens, overlap_bytes),
            |acc, (i, paragraph)| acc.push(paragraph, i == last),
        )
        .finish()
}
