//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_core::{ChunkResult, ChunkerResult};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Number of chunks kept
    pub total_chunks: usize,
    /// Token estimate over kept chunks
    pub total_tokens_estimate: usize,
    /// Token estimate of the whole document
    pub original_tokens_estimate: usize,
    /// Whether chunks were dropped by the chunk limit
    pub truncated: bool,
    /// The chunks
    pub chunks: Vec<ChunkResult>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, result: &ChunkerResult) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            total_chunks: result.total_chunks,
            total_tokens_estimate: result.total_tokens_estimate,
            original_tokens_estimate: result.original_tokens_estimate,
            truncated: result.truncated,
            chunks: result.chunks.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkwise_core::{Chunker, ChunkerConfig};

    #[test]
    fn test_json_output_round_trips() {
        let chunker = Chunker::new(ChunkerConfig {
            max_chunk_tokens: 1,
            max_chunks: 2,
            preserve_paragraphs: false,
            ..Default::default()
        })
        .unwrap();
        let result = chunker.split("aaaabbbbcccc");

        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_document("doc.txt", &result).unwrap();
            formatter.finish().unwrap();
        }

        let documents: Vec<DocumentData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source, "doc.txt");
        assert_eq!(documents[0].total_chunks, 2);
        assert!(documents[0].truncated);
        assert_eq!(documents[0].chunks[1].text, "bbbb");
        assert_eq!(documents[0].chunks[1].start_offset, 4);
    }
}
