//! Core generation types shared by Nocturne crates.
//!
//! These types describe a single text-generation exchange with an LLM
//! provider: a [`GenerateRequest`] carrying conversation [`Message`]s
//! and sampling bounds, and a [`GenerateResponse`] carrying the
//! generated text. They are transport-agnostic; provider crates map
//! them onto their own wire formats.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod response;
mod role;

pub use message::Message;
pub use request::GenerateRequest;
pub use response::GenerateResponse;
pub use role::Role;
