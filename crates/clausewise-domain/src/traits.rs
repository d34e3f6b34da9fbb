//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{ChatRequest, ContractText};
use std::future::Future;
use std::path::Path;

/// Trait for chat-completion providers
///
/// Implemented by the infrastructure layer (clausewise-llm). One call issues
/// one request and yields the assistant's text; no state is kept between
/// calls.
pub trait ChatProvider {
    /// Error type for provider operations
    type Error;

    /// Complete a single chat request
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Identifier of the model answering requests
    fn model_name(&self) -> &str;
}

/// Trait for turning a document on disk into contract text
///
/// Implemented by the infrastructure layer (clausewise-pdf)
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract the full text of the document, pages in order
    fn extract(&self, path: &Path) -> Result<ContractText, Self::Error>;
}
