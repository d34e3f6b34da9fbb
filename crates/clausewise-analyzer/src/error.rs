//! Error types for contract analysis

use clausewise_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while analyzing a contract
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The whole analysis call exceeded its time budget
    #[error("Analysis timeout after {0}s")]
    Timeout(u64),

    /// Contract exceeds maximum length
    #[error("Contract too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Nothing to analyze
    #[error("Contract text is empty")]
    EmptyContract,

    /// Blank question
    #[error("Question is empty")]
    EmptyQuestion,

    /// Checklist reply is not the expected JSON object
    #[error("Malformed checklist response: {reason}")]
    MalformedChecklistResponse {
        /// What was wrong with the reply
        reason: String,
        /// The reply as received
        raw: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    /// True when the model service could not be reached after retries
    pub fn is_service_unavailable(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Llm(LlmError::ServiceUnavailable { .. }) | AnalyzerError::Timeout(_)
        )
    }
}
