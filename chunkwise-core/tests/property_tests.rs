//! Property-based tests for both chunking strategies

use chunkwise_core::{estimate_tokens, Chunker, ChunkerConfig};
use proptest::prelude::*;

/// Paragraph-ish text: words separated by spaces, single and double newlines
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z]{1,12}",
            2 => Just(" ".to_string()),
            1 => Just("\n".to_string()),
            1 => Just("\n\n".to_string()),
            1 => "[àéîõü日本語😀]{1,3}",
        ],
        0..200,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn estimate_is_floor_of_quarter_length(text in ".*") {
        prop_assert_eq!(estimate_tokens(&text), text.len() / 4);
    }

    #[test]
    fn windows_tile_input_without_overlap(text in document(), max_tokens in 1usize..40) {
        let chunker = Chunker::new(ChunkerConfig::fixed_window(max_tokens)).unwrap();
        let result = chunker.split(&text);

        let rebuilt: String = result.chunks.iter().map(|c| c.text.as_str()).collect();
        prop_assert_eq!(&rebuilt, &text);

        for pair in result.chunks.windows(2) {
            prop_assert_eq!(pair[0].end_offset, pair[1].start_offset);
        }
        for chunk in &result.chunks {
            prop_assert_eq!(&text[chunk.start_offset..chunk.end_offset], chunk.text.as_str());
            prop_assert!(chunk.text.len() <= max_tokens * 4);
        }
    }

    #[test]
    fn paragraphs_are_never_split(text in document(), max_tokens in 1usize..40) {
        let chunker = Chunker::new(ChunkerConfig::paragraphs(max_tokens)).unwrap();
        let result = chunker.split(&text);

        let mut rebuilt = Vec::new();
        for chunk in &result.chunks {
            prop_assert_eq!(&text[chunk.start_offset..chunk.end_offset], chunk.text.as_str());
            rebuilt.push(chunk.text.as_str());

            // A chunk over budget holds a single non-empty paragraph
            if chunk.estimated_tokens > max_tokens {
                let paragraphs = chunk.text.split("\n\n").filter(|p| !p.is_empty()).count();
                prop_assert!(paragraphs <= 1);
            }
        }

        // A separator closing the final boundary belongs to no chunk
        let joined = rebuilt.join("\n\n");
        let rejoined = joined == text || format!("{joined}\n\n") == text;
        prop_assert!(rejoined, "chunks do not rebuild the input");
    }

    #[test]
    fn chunk_limit_holds(
        text in document(),
        max_tokens in 1usize..20,
        max_chunks in 1usize..6,
        preserve in any::<bool>(),
    ) {
        let config = ChunkerConfig {
            max_chunk_tokens: max_tokens,
            max_chunks: 0,
            preserve_paragraphs: preserve,
            ..Default::default()
        };
        let unbounded = Chunker::new(config.clone()).unwrap().split(&text);
        let limited = Chunker::new(ChunkerConfig { max_chunks, ..config }).unwrap().split(&text);

        prop_assert!(limited.total_chunks <= max_chunks);
        prop_assert_eq!(limited.truncated, unbounded.total_chunks > max_chunks);
        prop_assert_eq!(&limited.chunks[..], &unbounded.chunks[..limited.total_chunks]);
        prop_assert_eq!(
            limited.total_tokens_estimate,
            limited.chunks.iter().map(|c| c.estimated_tokens).sum::<usize>()
        );
        for (i, chunk) in limited.chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn split_is_deterministic(
        text in document(),
        max_tokens in 2usize..30,
        overlap in 0usize..2,
        preserve in any::<bool>(),
    ) {
        let chunker = Chunker::new(ChunkerConfig {
            max_chunk_tokens: max_tokens,
            overlap_tokens: overlap,
            preserve_paragraphs: preserve,
            max_chunks: 0,
            ..Default::default()
        }).unwrap();

        prop_assert_eq!(chunker.split(&text), chunker.split(&text));
    }

    #[test]
    fn window_overlap_terminates_on_boundaries(
        text in document(),
        max_tokens in 2usize..20,
        overlap_tokens in 1usize..20,
    ) {
        prop_assume!(overlap_tokens < max_tokens);
        let chunker = Chunker::new(ChunkerConfig {
            max_chunk_tokens: max_tokens,
            overlap_tokens,
            preserve_paragraphs: false,
            max_chunks: 0,
            ..Default::default()
        }).unwrap();

        let result = chunker.split(&text);
        for pair in result.chunks.windows(2) {
            prop_assert!(pair[1].start_offset > pair[0].start_offset);
            prop_assert!(pair[1].start_offset <= pair[0].end_offset);
        }
        if let Some(last) = result.chunks.last() {
            prop_assert_eq!(last.end_offset, text.len());
        }
    }
}
