//! OpenAI-compatible LLM provider.

use async_trait::async_trait;
use reqwest::Client;

use super::error::{LLMError, classify_api_error};
use super::provider::LLMProvider;
use super::types::{CompletionRequest, CompletionResponse};

/// Client for the OpenAI chat-completions API.
///
/// Works against any OpenAI-compatible endpoint via `base_url`.
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAIProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn chat(&self, request: CompletionRequest) -> Result<CompletionResponse, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status, body));
        }

        Ok(response.json().await?)
    }
}
