//! Story record types for the corpus boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A story accepted by the pipeline, ready to persist.
///
/// The sequential id is assigned by the caller from its own read of
/// the current corpus size, keeping generation free of persistence
/// side effects.
///
/// # Examples
///
/// ```
/// use nocturne_interface::NewStory;
///
/// let story = NewStory::new(
///     1,
///     None,
///     "A killer and his patient circle each other.".to_string(),
///     "Hannibal Lecter".to_string(),
/// );
/// assert_eq!(*story.story_id(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct NewStory {
    /// Sequential id, assigned by counting existing records
    story_id: i64,
    /// Source material the story drew from, when supplied
    source_material: Option<String>,
    /// One-sentence plot summary used for duplicate comparison
    plot_summary: String,
    /// Persona/style the narrative was written in
    style_inspiration: String,
}

/// A persisted story. Immutable once stored.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct StoryRecord {
    /// Sequential id, unique within the corpus
    story_id: i64,
    /// Source material the story drew from, when supplied
    source_material: Option<String>,
    /// One-sentence plot summary used for duplicate comparison
    plot_summary: String,
    /// Persona/style the narrative was written in
    style_inspiration: String,
    /// When the record was persisted
    created_at: DateTime<Utc>,
}

impl StoryRecord {
    /// Build a record from a new story at the given timestamp.
    pub fn from_new(story: NewStory, created_at: DateTime<Utc>) -> Self {
        Self {
            story_id: story.story_id,
            source_material: story.source_material,
            plot_summary: story.plot_summary,
            style_inspiration: story.style_inspiration,
            created_at,
        }
    }
}
