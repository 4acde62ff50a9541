//! LLM provider trait.

use async_trait::async_trait;

use super::error::LLMError;
use super::types::{CompletionRequest, CompletionResponse};

/// Trait for LLM providers.
///
/// The request handler only sees this trait, so tests can substitute a mock
/// provider without any network access.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Make a chat completion request.
    async fn chat(&self, request: CompletionRequest) -> Result<CompletionResponse, LLMError>;
}
