//! HTTP request handlers.

mod chat;
mod health;

pub use chat::chat;
pub use health::{health, root, test};
