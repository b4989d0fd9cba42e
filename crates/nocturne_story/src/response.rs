//! Caller-facing request and result shapes.

use crate::prompts::DEFAULT_INSPIRATION;
use serde::{Deserialize, Serialize};

/// Caller input for one story generation.
///
/// # Examples
///
/// ```
/// use nocturne_story::StoryRequest;
///
/// let request = StoryRequest::from_quote("darkness falls");
/// assert_eq!(request.quote(), "darkness falls");
/// assert_eq!(request.inspiration(), "Hannibal Lecter");
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
pub struct StoryRequest {
    /// The quote the narrative is built around
    quote: String,
    /// Optional book or text excerpt to draw from
    source_material: Option<String>,
    /// Optional persona/style override
    style_inspiration: Option<String>,
}

impl StoryRequest {
    /// Build a request from a bare quote.
    pub fn from_quote(quote: impl Into<String>) -> Self {
        Self::new(quote.into(), None, None)
    }

    /// The effective persona, falling back to the default.
    pub fn inspiration(&self) -> &str {
        self.style_inspiration
            .as_deref()
            .filter(|inspiration| !inspiration.trim().is_empty())
            .unwrap_or(DEFAULT_INSPIRATION)
    }
}

/// Result of one story generation, shaped for the transport layer.
///
/// On success `story_parts` holds exactly ten ordered chunks and
/// `plot` the accepted summary. On failure `story_parts` holds a
/// single human-readable fallback line; callers never see a raw error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    /// Whether a narrative was accepted
    #[getter(skip)]
    success: bool,
    /// Ten display chunks, or a single fallback line on failure
    story_parts: Vec<String>,
    /// Plot summary of the accepted narrative
    #[serde(skip_serializing_if = "Option::is_none")]
    plot: Option<String>,
    /// Sequential id assigned by the caller after persistence
    #[serde(skip_serializing_if = "Option::is_none")]
    story_id: Option<i64>,
    /// Set when the story was generated but could not be persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
}

impl StoryResponse {
    /// Whether a narrative was accepted.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// A successful generation.
    pub fn success(story_parts: Vec<String>, plot: impl Into<String>) -> Self {
        Self {
            success: true,
            story_parts,
            plot: Some(plot.into()),
            story_id: None,
            db_error: None,
        }
    }

    /// A failed generation carrying a single fallback line.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            story_parts: vec![message.into()],
            plot: None,
            story_id: None,
            db_error: None,
        }
    }

    /// Attach the sequential id assigned at persistence time.
    pub fn with_story_id(mut self, story_id: i64) -> Self {
        self.story_id = Some(story_id);
        self
    }

    /// Attach a persistence-error indicator.
    ///
    /// The generated content stays in place; a failed save never
    /// discards a narrative.
    pub fn with_db_error(mut self, message: impl Into<String>) -> Self {
        self.db_error = Some(message.into());
        self
    }
}
