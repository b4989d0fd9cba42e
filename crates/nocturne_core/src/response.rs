//! Response types from LLM generation.

use serde::{Deserialize, Serialize};

/// The unified generation response.
///
/// Nocturne consumes text only; providers returning multiple choices
/// collapse them to the first before constructing this type.
///
/// # Examples
///
/// ```
/// use nocturne_core::GenerateResponse;
///
/// let response = GenerateResponse::new("Once upon a midnight...".to_string());
/// assert_eq!(response.text(), "Once upon a midnight...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct GenerateResponse {
    /// The generated text
    text: String,
}

impl GenerateResponse {
    /// The generated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the response, yielding the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
