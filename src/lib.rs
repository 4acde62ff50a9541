//! Chat Gateway - a minimal HTTP service that relays chat messages to an
//! OpenAI-compatible completion API.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
