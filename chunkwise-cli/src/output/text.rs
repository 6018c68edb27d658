//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_core::ChunkerResult;
use std::io::Write;

/// Plain text formatter - outputs each chunk under a marker line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, result: &ChunkerResult) -> Result<()> {
        for chunk in &result.chunks {
            writeln!(
                self.writer,
                "--- {source} chunk {} of {} [{}..{}] ~{} tokens ---",
                chunk.index + 1,
                result.total_chunks,
                chunk.start_offset,
                chunk.end_offset,
                chunk.estimated_tokens
            )?;
            writeln!(self.writer, "{}", chunk.text)?;
        }
        if result.truncated {
            writeln!(
                self.writer,
                "--- {source} truncated after {} chunks ---",
                result.total_chunks
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
