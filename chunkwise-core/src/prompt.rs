//! Summarization handoff
//!
//! Builds the ordered message sequence a summarization client sends for one
//! chunked document, and reads the summary back out of the model's reply.
//! Nothing here touches the network; a client takes [`PromptPlan::messages`]
//! and transmits them in order.
//!
//! The sequence is always:
//! 1. one system message announcing how many chunks follow,
//! 2. one user message per chunk, wrapped in a numbered marker,
//! 3. one user message asking for the final summary.

use crate::{
    chunk::{chunks_to_strings, ChunkerResult},
    error::PromptError,
    estimator::estimate_tokens,
};
use serde_json::Value;

/// Message author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// Instructions framing the exchange
    System,
    /// Content supplied on the caller's behalf
    User,
}

/// One message of the exchange
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromptMessage {
    /// Who sends the message
    pub role: Role,
    /// Message body
    pub content: String,
}

/// Message templates
///
/// `system_template` may use `{total}`. `chunk_template` may use `{index}`
/// (1-based), `{total}` and `{content}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PromptTemplates {
    /// Leading instruction
    pub system_template: String,
    /// Wrapper for each chunk
    pub chunk_template: String,
    /// Closing request for the summary
    pub final_prompt: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system_template: "You will receive {total} chunks of a document. Do not respond \
                until you receive the final chunk. After the last chunk, I will prompt you \
                for your analysis of the entire document."
                .to_string(),
            chunk_template: "#--- chunk {index} of {total} ---#\n{content}\n#--- end of chunk {index} ---#"
                .to_string(),
            final_prompt: "You have now received all chunks. Please analyze the entire document \
                and provide a summary in the following JSON format:\n\
                {\"type\": \"text\", \"content\": \"...\"}\n\
                The content field must be a Markdown-formatted summary with the following \
                sections:\n# Overview\n# Key Points\n# Details\n# Conclusions\n\n\
                Respond ONLY with valid JSON as shown above, and ensure the content is Markdown."
                .to_string(),
        }
    }
}

impl PromptTemplates {
    fn render_system(&self, total: usize) -> String {
        self.system_template.replace("{total}", &total.to_string())
    }

    fn render_chunk(&self, index: usize, total: usize, content: &str) -> String {
        // Substitute {content} last so braces inside the chunk survive untouched
        self.chunk_template
            .replace("{index}", &index.to_string())
            .replace("{total}", &total.to_string())
            .replace("{content}", content)
    }
}

/// The complete message sequence for one document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromptPlan {
    /// Messages in send order
    pub messages: Vec<PromptMessage>,
    /// Number of per-chunk messages
    pub chunk_count: usize,
}

impl PromptPlan {
    /// Build the sequence for `chunks`, kept in the given order
    pub fn build<S: AsRef<str>>(
        templates: &PromptTemplates,
        chunks: &[S],
    ) -> Result<Self, PromptError> {
        if chunks.is_empty() {
            return Err(PromptError::NoChunks);
        }

        let total = chunks.len();
        let mut messages = Vec::with_capacity(total + 2);
        messages.push(PromptMessage {
            role: Role::System,
            content: templates.render_system(total),
        });
        messages.extend(chunks.iter().enumerate().map(|(i, chunk)| PromptMessage {
            role: Role::User,
            content: templates.render_chunk(i + 1, total, chunk.as_ref()),
        }));
        messages.push(PromptMessage {
            role: Role::User,
            content: templates.final_prompt.clone(),
        });

        Ok(Self {
            messages,
            chunk_count: total,
        })
    }

    /// Build the sequence straight from a split result
    pub fn from_result(
        templates: &PromptTemplates,
        result: &ChunkerResult,
    ) -> Result<Self, PromptError> {
        Self::build(templates, &chunks_to_strings(Some(result)))
    }

    /// Number of per-chunk messages, equal to the result's `total_chunks`
    pub fn chunk_message_count(&self) -> usize {
        self.chunk_count
    }

    /// Token estimate of everything sent
    pub fn estimated_prompt_tokens(&self) -> usize {
        self.messages
            .iter()
            .map(|m| estimate_tokens(&m.content))
            .sum()
    }
}

/// Pull the summary out of a model reply shaped like
/// `{"type": "text", "content": "..."}`
///
/// Text around the outermost braces is ignored, so replies wrapped in code
/// fences or prose still parse.
pub fn extract_summary_content(raw: &str) -> Result<String, PromptError> {
    if raw.trim().is_empty() {
        return Err(PromptError::EmptyResponse);
    }

    let (start, end) = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(PromptError::InvalidJson {
                reason: "no JSON object found".to_string(),
            })
        }
    };

    let value: Value = serde_json::from_str(&raw[start..=end])?;
    match value.get("content").and_then(Value::as_str) {
        Some(content) if !content.is_empty() => Ok(content.to_string()),
        _ => Err(PromptError::InvalidJson {
            reason: "content field is empty".to_string(),
        }),
    }
}
