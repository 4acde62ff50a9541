//! LLM error types.

use thiserror::Error;

/// Errors that can occur when making LLM API calls.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed before a response was received
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider rejected the configured credential
    #[error("invalid api key")]
    InvalidApiKey,

    /// Provider reported a rate limit
    #[error("rate limit exceeded")]
    RateLimit,

    /// Any other API error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Classify a non-2xx provider response into an [`LLMError`].
///
/// The OpenAI API signals credential and throttling failures both through
/// status codes and through error-code strings in the body, so both are
/// checked.
pub fn classify_api_error(status: u16, body: String) -> LLMError {
    let lowered = body.to_lowercase();
    if status == 401 || lowered.contains("invalid_api_key") {
        LLMError::InvalidApiKey
    } else if status == 429 || lowered.contains("rate_limit") {
        LLMError::RateLimit
    } else {
        LLMError::Api {
            status,
            message: body,
        }
    }
}
