//! Trait seams for the Nocturne story-generation service.
//!
//! Two boundaries are defined here: [`NocturneDriver`], the contract a
//! text-generation provider must offer the pipeline, and
//! [`CorpusRepository`], the persistence boundary the pipeline's
//! callers use to store accepted stories and read existing plot
//! summaries for duplicate detection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod story;
mod traits;

pub use story::{NewStory, StoryRecord};
pub use traits::{CorpusRepository, NocturneDriver};
