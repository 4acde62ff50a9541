//! LLM provider client for chat completions.

mod error;
mod openai;
mod provider;
mod types;

pub use error::{LLMError, classify_api_error};
pub use openai::OpenAIProvider;
pub use provider::LLMProvider;
pub use types::{Choice, CompletionRequest, CompletionResponse, Message, Role, Usage};
