//! Request types for LLM generation.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// A single text-generation request.
///
/// # Examples
///
/// ```
/// use nocturne_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::new(
///     vec![Message::new(Role::User, "Hello!".to_string())],
///     Some(100),
///     Some(0.7),
///     None,
/// );
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    temperature: Option<f32>,
    /// Model identifier override
    model: Option<String>,
}

impl GenerateRequest {
    /// Build a single-turn request from a user prompt with an output
    /// token bound. This is the shape every pipeline call uses.
    ///
    /// # Examples
    ///
    /// ```
    /// use nocturne_core::GenerateRequest;
    ///
    /// let request = GenerateRequest::from_prompt("Summarize this.", 100);
    /// assert_eq!(request.messages().len(), 1);
    /// assert_eq!(*request.max_tokens(), Some(100));
    /// ```
    pub fn from_prompt(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self::new(
            vec![Message::new(Role::User, prompt.into())],
            Some(max_tokens),
            None,
            None,
        )
    }
}
