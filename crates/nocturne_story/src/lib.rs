//! Story-generation pipeline for Nocturne.
//!
//! The pipeline turns a short quote into a ten-part dark psychological
//! thriller while keeping the corpus of accepted plots free of
//! semantic duplicates:
//!
//! 1. [`StoryGenerator`] builds a constrained narrative prompt and
//!    invokes the generation driver.
//! 2. [`PlotSummarizer`] reduces the narrative to a one-sentence plot.
//! 3. [`DuplicateChecker`] compares that plot pairwise against the
//!    existing plot set, short-circuiting on the first match.
//! 4. On a duplicate the generator retries with an amended quote, up
//!    to a finite ceiling; when the ceiling is exhausted the last
//!    narrative is accepted anyway.
//! 5. The accepted narrative is segmented into exactly ten ordered
//!    parts for display.
//!
//! Persistence is the caller's job: the generator reads nothing and
//! writes nothing beyond driver calls, so callers snapshot the plot
//! set before generating and save accepted stories after.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod duplicate;
mod generator;
pub mod prompts;
mod response;
mod segment;
mod summarizer;

pub use duplicate::DuplicateChecker;
pub use generator::StoryGenerator;
pub use response::{StoryRequest, StoryResponse};
pub use segment::{STORY_PART_COUNT, segment_story, split_sentences};
pub use summarizer::PlotSummarizer;
