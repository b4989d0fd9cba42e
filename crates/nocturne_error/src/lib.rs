//! Error types for the Nocturne story-generation service.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use nocturne_error::{NocturneResult, ConfigError};
//!
//! fn load_key() -> NocturneResult<String> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got key of length {}", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod corpus;
mod error;
mod generation;
mod story;

pub use config::ConfigError;
pub use corpus::{CorpusError, CorpusErrorKind};
pub use error::{NocturneError, NocturneErrorKind, NocturneResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use story::{StoryError, StoryErrorKind};
