//! Corpus repository error types.

/// Specific error conditions for corpus operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CorpusErrorKind {
    /// No story exists with the given sequential id
    #[display("Story {} not found", _0)]
    NotFound(i64),
    /// A story with the given sequential id already exists
    #[display("Story {} already exists", _0)]
    DuplicateId(i64),
    /// The backing store rejected the write
    #[display("Failed to save story: {}", _0)]
    Save(String),
    /// The backing store could not be read
    #[display("Failed to read corpus: {}", _0)]
    Read(String),
}

/// Error type for corpus repository operations.
///
/// # Examples
///
/// ```
/// use nocturne_error::{CorpusError, CorpusErrorKind};
///
/// let err = CorpusError::new(CorpusErrorKind::NotFound(7));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Corpus Error: {} at line {} in {}", kind, line, file)]
pub struct CorpusError {
    /// The specific error condition
    pub kind: CorpusErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CorpusError {
    /// Create a new CorpusError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CorpusErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
