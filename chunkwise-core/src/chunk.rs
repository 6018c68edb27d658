//! Chunk and result types

/// A single chunk with its position in the original text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkResult {
    /// The chunk content
    pub text: String,
    /// 0-based position in the chunk sequence
    pub index: usize,
    /// Token estimate for `text`
    pub estimated_tokens: usize,
    /// Byte offset in the original text where this chunk's span starts
    pub start_offset: usize,
    /// Byte offset in the original text where this chunk's span ends
    pub end_offset: usize,
}

/// Output of a single split operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkerResult {
    /// Chunks in order
    pub chunks: Vec<ChunkResult>,
    /// Number of chunks after any truncation
    pub total_chunks: usize,
    /// Sum of `estimated_tokens` over the retained chunks
    pub total_tokens_estimate: usize,
    /// Whether the chunk ceiling dropped trailing chunks
    pub truncated: bool,
    /// Token estimate of the whole input
    pub original_tokens_estimate: usize,
}

impl ChunkerResult {
    /// Assemble a result from the full chunk list, applying the chunk ceiling
    ///
    /// Chunks past `max_chunks` are dropped without re-indexing; totals are
    /// computed from what remains.
    pub(crate) fn assemble(
        mut chunks: Vec<ChunkResult>,
        max_chunks: usize,
        original_tokens_estimate: usize,
    ) -> Self {
        let truncated = max_chunks > 0 && chunks.len() > max_chunks;
        if truncated {
            chunks.truncate(max_chunks);
        }

        let total_tokens_estimate = chunks.iter().map(|c| c.estimated_tokens).sum();

        Self {
            total_chunks: chunks.len(),
            total_tokens_estimate,
            truncated,
            original_tokens_estimate,
            chunks,
        }
    }

    /// True when no chunks were produced
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterate over chunk texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(|c| c.text.as_str())
    }
}

/// Extract the chunk texts in order
///
/// This is the shape handed to the summarization side. `None` and chunk-less
/// results both give an empty vector.
pub fn chunks_to_strings(result: Option<&ChunkerResult>) -> Vec<String> {
    match result {
        Some(result) => result.texts().map(str::to_string).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str, index: usize) -> ChunkResult {
        ChunkResult {
            text: text.to_string(),
            index,
            estimated_tokens: text.len() / 4,
            start_offset: 0,
            end_offset: text.len(),
        }
    }

    #[test]
    fn test_chunks_to_strings_none() {
        assert!(chunks_to_strings(None).is_empty());
    }

    #[test]
    fn test_chunks_to_strings_empty_result() {
        let result = ChunkerResult::default();
        assert!(chunks_to_strings(Some(&result)).is_empty());
    }

    #[test]
    fn test_chunks_to_strings_preserves_order() {
        let result = ChunkerResult::assemble(vec![chunk("a", 0), chunk("b", 1)], 0, 0);
        assert_eq!(chunks_to_strings(Some(&result)), vec!["a", "b"]);
    }

    #[test]
    fn test_assemble_truncates_and_recomputes() {
        let chunks = vec![
            chunk("aaaaaaaa", 0),
            chunk("bbbbbbbbbbbb", 1),
            chunk("cccccccccccccccc", 2),
        ];
        let result = ChunkerResult::assemble(chunks, 2, 9);

        assert!(result.truncated);
        assert_eq!(result.total_chunks, 2);
        assert_eq!(result.total_tokens_estimate, 2 + 3);
        assert_eq!(result.original_tokens_estimate, 9);
        assert_eq!(result.chunks[1].index, 1);
    }

    #[test]
    fn test_assemble_at_limit_is_not_truncated() {
        let result = ChunkerResult::assemble(vec![chunk("a", 0), chunk("b", 1)], 2, 0);
        assert!(!result.truncated);
        assert_eq!(result.total_chunks, 2);
    }
}
