//! Error types for the summarization pipeline

use thiserror::Error;

/// Reasons a document cannot be summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// The document is empty or contains only whitespace
    #[error("input article text cannot be empty")]
    EmptyInput,

    /// Sentence splitting produced no non-empty sentences
    #[error("no sentences found in the input article")]
    NoSentences,
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
