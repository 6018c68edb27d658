//! Fixed-window strategy

use super::{ceil_char_boundary, floor_char_boundary};
use crate::{chunk::ChunkResult, estimator::estimate_tokens};

/// Cut `text` into windows of at most `window_bytes`, stepping back
/// `overlap_bytes` between windows
///
/// Window ends are pulled back and overlap starts pushed forward to the
/// nearest char boundary, so every chunk is valid UTF-8. Without overlap the
/// windows tile the text exactly.
pub(super) fn split_windows(
    text: &str,
    window_bytes: usize,
    overlap_bytes: usize,
) -> Vec<ChunkResult> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = floor_char_boundary(text, start.saturating_add(window_bytes));
        if end <= start {
            end = ceil_char_boundary(text, start + 1);
        }

        let chunk_text = &text[start..end];
        chunks.push(ChunkResult {
            text: chunk_text.to_string(),
            index: chunks.len(),
            estimated_tokens: estimate_tokens(chunk_text),
            start_offset: start,
            end_offset: end,
        });

        start = if overlap_bytes > 0 && end < text.len() {
            let next = ceil_char_boundary(text, end.saturating_sub(overlap_bytes));
            if next > start {
                next
            } else {
                end
            }
        } else {
            end
        };
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_windows() {
        let text = "x".repeat(200);
        let chunks = split_windows(&text, 100, 0);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text.len(), 100);
        assert_eq!(chunks[1].text.len(), 100);
        assert_eq!(chunks[0].end_offset, chunks[1].start_offset);
    }

    #[test]
    fn test_short_final_window() {
        let text = "y".repeat(250);
        let chunks = split_windows(&text, 100, 0);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].text.len(), 50);
        assert_eq!(chunks[2].end_offset, 250);
    }

    #[test]
    fn test_overlap_steps_back() {
        let text = "y".repeat(300);
        let chunks = split_windows(&text, 100, 20);

        assert_eq!(chunks[1].start_offset, 80);
        assert_eq!(chunks[2].start_offset, 160);
        assert_eq!(chunks.last().unwrap().end_offset, 300);
        assert_eq!(chunks.len(), 4);
    }

    #[test]
    fn test_multibyte_windows_stay_on_boundaries() {
        // 3-byte characters never align with a 4-byte window
        let text = "日本語のテキストです".repeat(5);
        let chunks = split_windows(&text, 8, 0);

        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(rebuilt, text);
        assert!(chunks.iter().all(|c| c.text.len() <= 8 && !c.text.is_empty()));
    }

    #[test]
    fn test_multibyte_overlap_advances() {
        let text = "😀".repeat(20); // 4 bytes each
        let chunks = split_windows(&text, 8, 6);

        for pair in chunks.windows(2) {
            assert!(pair[1].start_offset > pair[0].start_offset);
        }
        assert_eq!(chunks.last().unwrap().end_offset, text.len());
    }
}
