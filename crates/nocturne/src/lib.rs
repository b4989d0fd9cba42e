//! Nocturne - quote-driven story generation over an LLM driver.
//!
//! Nocturne turns a short quote into a ten-part dark psychological
//! thriller, keeping the accepted-story corpus free of semantic plot
//! duplicates. The workspace is organized as focused crates:
//!
//! - `nocturne_core` - generation request/response types
//! - `nocturne_interface` - driver and corpus trait seams
//! - `nocturne_error` - error types
//! - `nocturne_rate_limit` - quota and concurrency limiting
//! - `nocturne_models` - LLM provider drivers (OpenAI)
//! - `nocturne_corpus` - story corpus repositories
//! - `nocturne_story` - the generation pipeline
//!
//! This crate re-exports everything for convenience and adds the
//! caller-side persistence flow in [`service`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nocturne::{InMemoryCorpus, OpenAiClient, StoryGenerator, StoryRequest};
//! use nocturne::service::generate_and_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = StoryGenerator::new(OpenAiClient::from_env()?);
//!     let corpus = InMemoryCorpus::new();
//!     let request = StoryRequest::from_quote("darkness falls");
//!     let response = generate_and_store(&generator, &corpus, &request).await?;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod service;

pub use nocturne_core::{GenerateRequest, GenerateResponse, Message, Role};
pub use nocturne_corpus::{InMemoryCorpus, JsonCorpus};
pub use nocturne_error::{
    ConfigError, CorpusError, GenerationError, NocturneError, NocturneResult, StoryError,
};
pub use nocturne_interface::{CorpusRepository, NewStory, NocturneDriver, StoryRecord};
pub use nocturne_models::{OpenAiClient, Throttled};
pub use nocturne_rate_limit::{RateLimitConfig, RateLimiter};
pub use nocturne_story::{
    DuplicateChecker, PlotSummarizer, STORY_PART_COUNT, StoryGenerator, StoryRequest,
    StoryResponse, prompts, segment_story, split_sentences,
};
