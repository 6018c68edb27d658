//! Basic usage of the chunking engine

use chunkwise_core::{
    chunks_to_strings, estimate_tokens, Chunker, ChunkerConfig, PromptPlan, PromptTemplates,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Chunking keeps long documents inside a model's context window.\n\n\
                Each chunk carries its offsets and a token estimate.\n\n\
                Paragraphs stay whole unless the fixed-window strategy is chosen.";

    println!("Whole text: ~{} tokens", estimate_tokens(text));

    // Paragraph-preserving, small budget so the text splits
    println!("\n=== Paragraphs ===");
    let chunker = Chunker::new(ChunkerConfig::builder().max_chunk_tokens(20).build()?)?;
    println!("Expected chunks: {}", chunker.estimate_chunk_count(text));

    let result = chunker.split(text);
    for chunk in &result.chunks {
        println!(
            "  #{} [{}..{}] ~{} tokens: {:?}",
            chunk.index, chunk.start_offset, chunk.end_offset, chunk.estimated_tokens, chunk.text
        );
    }

    // Fixed windows with overlap and a chunk ceiling
    println!("\n=== Fixed windows ===");
    let chunker = Chunker::new(
        ChunkerConfig::builder()
            .max_chunk_tokens(10)
            .overlap_tokens(2)
            .max_chunks(4)
            .preserve_paragraphs(false)
            .build()?,
    )?;
    let result = chunker.split(text);
    println!(
        "{} chunks, truncated: {}, ~{} of ~{} tokens kept",
        result.total_chunks,
        result.truncated,
        result.total_tokens_estimate,
        result.original_tokens_estimate
    );

    // Hand off to a summarizer
    println!("\n=== Prompt plan ===");
    let plan = PromptPlan::build(&PromptTemplates::default(), &chunks_to_strings(Some(&result)))?;
    println!(
        "{} messages, ~{} prompt tokens",
        plan.messages.len(),
        plan.estimated_prompt_tokens()
    );

    Ok(())
}
