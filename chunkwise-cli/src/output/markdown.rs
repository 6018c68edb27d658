//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_core::{truncate_with_ellipsis, ChunkerResult};
use std::io::Write;

/// Markdown formatter - outputs a chunk table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    preview_len: usize,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, preview_len: usize) -> Self {
        Self {
            writer,
            preview_len,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, result: &ChunkerResult) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Span | Tokens | Preview |")?;
        writeln!(self.writer, "|---|------|--------|---------|")?;

        for chunk in &result.chunks {
            let flat = chunk.text.replace('\n', " ").replace('|', "\\|");
            writeln!(
                self.writer,
                "| {} | {}..{} | {} | {} |",
                chunk.index + 1,
                chunk.start_offset,
                chunk.end_offset,
                chunk.estimated_tokens,
                truncate_with_ellipsis(&flat, self.preview_len)
            )?;
        }

        writeln!(self.writer)?;
        if result.truncated {
            writeln!(
                self.writer,
                "> Truncated: ~{} of ~{} tokens kept",
                result.total_tokens_estimate, result.original_tokens_estimate
            )?;
            writeln!(self.writer)?;
        }

        self.chunk_count += result.total_chunks;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkwise_core::{Chunker, ChunkerConfig};

    #[test]
    fn test_markdown_table() {
        let chunker = Chunker::new(ChunkerConfig::paragraphs(3)).unwrap();
        let result = chunker.split("first | part\n\nsecond part here");

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer, 10);
            formatter.format_document("notes.md", &result).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("## notes.md\n"));
        assert!(output.contains("| 1 | 0..12 | 3 | first \\... |"));
        assert!(output.contains("*Total chunks: 2*"));
    }
}
