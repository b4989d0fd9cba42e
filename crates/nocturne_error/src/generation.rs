//! Generation error types for the LLM driver boundary.

/// Specific error conditions for text-generation calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Transport-level failure reaching the provider
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body or provider error message
        message: String,
    },
    /// Provider response could not be parsed
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// Request exceeded the configured timeout
    #[display("Generation request timed out")]
    Timeout,
    /// Provider returned no usable text output
    #[display("Provider response contained no text output")]
    EmptyResponse,
    /// Request was rejected before sending (bad prompt, missing model)
    #[display("Invalid generation request: {}", _0)]
    InvalidRequest(String),
}

/// Error type for generation operations.
///
/// # Examples
///
/// ```
/// use nocturne_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout);
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
