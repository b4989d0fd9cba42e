//! Wire types for the OpenAI chat-completions API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One conversation message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a successful completion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ChatResponse {
    pub id: String,
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ChatChoice {
    pub index: u32,
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The assistant message inside a choice.
///
/// `content` is nullable on the wire (tool-call responses omit it),
/// though Nocturne only ever requests plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}
