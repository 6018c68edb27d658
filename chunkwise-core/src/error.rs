//! Error types
//!
//! Chunking itself never fails once a [`Chunker`](crate::Chunker) exists; the
//! only chunking error is a configuration rejected at construction time.

use thiserror::Error;

/// Errors raised while configuring a chunker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Configuration values that would stall or divide by zero
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which constraint was violated
        reason: String,
    },
}

/// Errors raised while preparing or reading a summarization exchange
#[derive(Error, Debug)]
pub enum PromptError {
    /// No chunks were supplied
    #[error("no chunks provided for summarization")]
    NoChunks,

    /// The model reply contained nothing
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The model reply did not carry the expected JSON object
    #[error("response does not contain valid JSON: {reason}")]
    InvalidJson {
        /// What was wrong with the reply
        reason: String,
    },
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        PromptError::InvalidJson {
            reason: err.to_string(),
        }
    }
}

/// Result type for chunker construction
pub type Result<T> = std::result::Result<T, ChunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = ChunkError::InvalidConfig {
            reason: "max_chunk_tokens must be greater than 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid configuration: max_chunk_tokens must be greater than 0"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: PromptError = parse_err.into();

        match error {
            PromptError::InvalidJson { reason } => assert!(!reason.is_empty()),
            _ => panic!("Wrong error type"),
        }
    }
}
