//! Top-level error wrapper types.

use crate::{ConfigError, CorpusError, GenerationError, StoryError};

/// Foundation error enum aggregating the error families of the
/// Nocturne crates.
///
/// # Examples
///
/// ```
/// use nocturne_error::{ConfigError, NocturneError};
///
/// let cfg_err = ConfigError::new("Missing API key");
/// let err: NocturneError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NocturneErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// LLM generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Corpus repository error
    #[from(CorpusError)]
    Corpus(CorpusError),
    /// Story pipeline error
    #[from(StoryError)]
    Story(StoryError),
}

/// Nocturne error with kind discrimination.
///
/// The kind is boxed to keep `Result<T, NocturneError>` small on the
/// happy path.
///
/// # Examples
///
/// ```
/// use nocturne_error::{ConfigError, NocturneResult};
///
/// fn might_fail() -> NocturneResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Nocturne Error: {}", _0)]
pub struct NocturneError(Box<NocturneErrorKind>);

impl NocturneError {
    /// Create a new error from a kind.
    pub fn new(kind: NocturneErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Access the underlying kind.
    pub fn kind(&self) -> &NocturneErrorKind {
        &self.0
    }
}

impl From<ConfigError> for NocturneError {
    fn from(value: ConfigError) -> Self {
        Self::new(value.into())
    }
}

impl From<GenerationError> for NocturneError {
    fn from(value: GenerationError) -> Self {
        Self::new(value.into())
    }
}

impl From<CorpusError> for NocturneError {
    fn from(value: CorpusError) -> Self {
        Self::new(value.into())
    }
}

impl From<StoryError> for NocturneError {
    fn from(value: StoryError) -> Self {
        Self::new(value.into())
    }
}

/// Result alias for fallible Nocturne operations.
pub type NocturneResult<T> = Result<T, NocturneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenerationErrorKind, StoryErrorKind};

    #[test]
    fn kind_conversion_preserves_variant() {
        let err: NocturneError = GenerationError::new(GenerationErrorKind::Timeout).into();
        assert!(matches!(err.kind(), NocturneErrorKind::Generation(_)));

        let err: NocturneError = StoryError::new(StoryErrorKind::InvalidQuote).into();
        assert!(matches!(err.kind(), NocturneErrorKind::Story(_)));
    }

    #[test]
    fn display_includes_location() {
        let err = ConfigError::new("missing key");
        let rendered = format!("{}", err);
        assert!(rendered.contains("missing key"));
        assert!(rendered.contains("error.rs"));
    }
}
