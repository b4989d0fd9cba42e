//! LLM provider drivers for Nocturne.
//!
//! Currently a single provider is implemented: the OpenAI
//! chat-completions API, behind [`OpenAiClient`]. Any provider
//! offering the prompt-in, text-out, token-bounded contract of
//! [`nocturne_interface::NocturneDriver`] is substitutable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;
mod throttled;

pub use openai::OpenAiClient;
pub use throttled::Throttled;
