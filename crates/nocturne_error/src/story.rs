//! Story pipeline error types.
//!
//! Most pipeline failures degrade to fallback text rather than
//! propagating (see the summarizer and duplicate checker); these types
//! cover the conditions that abort the pipeline outright.

/// Specific error conditions for story generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryErrorKind {
    /// Caller supplied an empty or whitespace-only quote
    #[display("Quote must be non-empty text")]
    InvalidQuote,
    /// Required generation credentials are absent
    #[display("Generation credentials are not configured")]
    MissingCredentials,
    /// Retry ceiling must allow at least one attempt
    #[display("Retry ceiling of {} permits no attempts", _0)]
    ZeroRetryCeiling(usize),
}

/// Error type for story generation.
///
/// # Examples
///
/// ```
/// use nocturne_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::InvalidQuote);
/// assert!(format!("{}", err).contains("non-empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
