//! OpenAI chat-completions driver.

mod client;
mod wire;

pub use client::OpenAiClient;
pub(crate) use wire::{ChatMessage, ChatRequest, ChatResponse};
