//! A single chunker shared across threads

use chunkwise_core::{Chunker, ChunkerConfig};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_chunker_is_send_sync() {
    assert_send_sync::<Chunker>();
}

#[test]
fn test_concurrent_splits_match_sequential() {
    let chunker = Arc::new(
        Chunker::new(ChunkerConfig {
            max_chunk_tokens: 20,
            max_chunks: 0,
            overlap_tokens: 3,
            ..Default::default()
        })
        .unwrap(),
    );

    let texts: Vec<String> = (0..8)
        .map(|i| {
            (0..(i + 3))
                .map(|p| format!("Paragraph {p} of document {i} with some filler words."))
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .collect();

    let expected: Vec<_> = texts.iter().map(|t| chunker.split(t)).collect();

    let handles: Vec<_> = texts
        .iter()
        .cloned()
        .map(|text| {
            let chunker = Arc::clone(&chunker);
            thread::spawn(move || chunker.split(&text))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_scoped_threads_share_borrowed_chunker() {
    let chunker = Chunker::new(ChunkerConfig::fixed_window(16)).unwrap();
    let text = "shared input ".repeat(100);
    let baseline = chunker.split(&text);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(chunker.split(&text), baseline));
        }
    });
}
