//! Chat HTTP handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm::{CompletionRequest, LLMError, Message, Role, Usage};
use crate::response;
use crate::server::AppState;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
const MAX_MESSAGE_CHARS: usize = 10_000;
const MAX_COMPLETION_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
    #[serde(default = "default_model")]
    model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Serialize)]
pub struct ChatResponse {
    status: &'static str,
    response: String,
    model: String,
    usage: Usage,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /chat
///
/// Forwards the user message to the configured provider and relays the first
/// completion choice together with token usage. Exactly one outbound call is
/// made per invocation; nothing is retried.
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let Some(provider) = state.provider.clone() else {
        return response::service_unavailable(
            "OpenAI API key not configured. Please set OPENAI_API_KEY environment variable.",
        )
        .into_response();
    };

    if req.message.trim().is_empty() {
        return response::bad_request("Message cannot be empty").into_response();
    }
    if req.message.chars().count() > MAX_MESSAGE_CHARS {
        return response::bad_request(format!(
            "Message cannot exceed {MAX_MESSAGE_CHARS} characters"
        ))
        .into_response();
    }

    let completion_request = CompletionRequest {
        model: req.model.clone(),
        messages: vec![
            Message {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: Role::User,
                content: req.message,
            },
        ],
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_COMPLETION_TOKENS),
    };

    let completion = match provider.chat(completion_request).await {
        Ok(c) => c,
        Err(e) => {
            warn!(model = %req.model, error = %e, "chat completion failed");
            return completion_error_response(e);
        }
    };

    let content = completion
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .unwrap_or_default();

    let response = ChatResponse {
        status: "success",
        response: content,
        model: req.model,
        usage: completion.usage.unwrap_or_default(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

fn completion_error_response(error: LLMError) -> Response {
    match error {
        LLMError::InvalidApiKey => response::unauthorized("Invalid API key").into_response(),
        LLMError::RateLimit => {
            response::too_many_requests("Rate limit exceeded").into_response()
        }
        other => response::internal_error(format!("Error: {other}")).into_response(),
    }
}
