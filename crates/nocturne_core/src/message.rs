//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a conversation.
///
/// Nocturne is a text-only pipeline, so message content is a plain
/// string rather than a multimodal block list.
///
/// # Examples
///
/// ```
/// use nocturne_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Tell me a story.".to_string());
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Tell me a story.");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    content: String,
}
