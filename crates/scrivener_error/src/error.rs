//! Crate-level error wrapper.

use crate::{
    ConfigError, DomainValidationError, GenerationFailure, SchemaValidationError, ServerError,
    TimeoutError, UnknownStrategyError,
};

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From)]
pub enum ScrivenerErrorKind {
    /// Request or response contract violation
    SchemaValidation(SchemaValidationError),
    /// No strategy registered for the discriminant
    UnknownStrategy(UnknownStrategyError),
    /// Strategy precondition failure
    DomainValidation(DomainValidationError),
    /// Unexpected failure during generation
    Generation(GenerationFailure),
    /// Generation exceeded its deadline
    Timeout(TimeoutError),
    /// Configuration error
    Config(ConfigError),
    /// HTTP listener failure
    Server(ServerError),
}

impl std::fmt::Display for ScrivenerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrivenerErrorKind::SchemaValidation(e) => write!(f, "{}", e),
            ScrivenerErrorKind::UnknownStrategy(e) => write!(f, "{}", e),
            ScrivenerErrorKind::DomainValidation(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Generation(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Timeout(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Config(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Scrivener error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivener_error::{DomainValidationError, ScrivenerError, ScrivenerErrorKind};
///
/// let err: ScrivenerError = DomainValidationError::new("claim is required").into();
/// assert!(err.is_validation());
/// assert_eq!(err.detail(), "claim is required");
/// assert!(matches!(err.kind(), ScrivenerErrorKind::DomainValidation(_)));
/// ```
#[derive(Debug, Clone)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }

    /// Whether this is an expected validation failure.
    ///
    /// Validation failures reach the caller unchanged; everything else
    /// raised during generation is wrapped into [`GenerationFailure`].
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ScrivenerErrorKind::SchemaValidation(_)
                | ScrivenerErrorKind::UnknownStrategy(_)
                | ScrivenerErrorKind::DomainValidation(_)
        )
    }

    /// Caller-facing message, without source location.
    pub fn detail(&self) -> String {
        match self.kind() {
            ScrivenerErrorKind::SchemaValidation(e) => e.message.clone(),
            ScrivenerErrorKind::UnknownStrategy(e) => e.message(),
            ScrivenerErrorKind::DomainValidation(e) => e.message.clone(),
            ScrivenerErrorKind::Generation(e) => e.message.clone(),
            ScrivenerErrorKind::Timeout(e) => e.message(),
            ScrivenerErrorKind::Config(e) => e.message.clone(),
            ScrivenerErrorKind::Server(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for ScrivenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scrivener Error: {}", self.0)
    }
}

impl std::error::Error for ScrivenerError {}

// Generic From implementation for any type that converts to ScrivenerErrorKind
impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validation_kinds_are_classified() {
        let schema: ScrivenerError = SchemaValidationError::new("bad shape").into();
        let unknown: ScrivenerError = UnknownStrategyError::new("summarize").into();
        let domain: ScrivenerError = DomainValidationError::new("content missing").into();
        assert!(schema.is_validation());
        assert!(unknown.is_validation());
        assert!(domain.is_validation());

        let failure: ScrivenerError = GenerationFailure::new("boom").into();
        let timeout: ScrivenerError = TimeoutError::new(Duration::from_secs(3)).into();
        let config: ScrivenerError = ConfigError::new("API_PORT must be a port number").into();
        assert!(!failure.is_validation());
        assert!(!timeout.is_validation());
        assert!(!config.is_validation());
    }

    #[test]
    fn test_detail_omits_location() {
        let err: ScrivenerError = UnknownStrategyError::new("summarize").into();
        assert_eq!(
            err.detail(),
            "No strategy found for generation type: summarize"
        );
        assert!(!err.detail().contains("line"));
        assert!(err.to_string().contains("line"));
    }

    #[test]
    fn test_location_is_tracked() {
        let err = SchemaValidationError::new("x");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_timeout_detail() {
        let err: ScrivenerError = TimeoutError::new(Duration::from_secs(30)).into();
        assert_eq!(err.detail(), "Generation timed out after 30 seconds");
    }

    #[test]
    fn test_config_and_timeout_display_carry_location() {
        let config = ConfigError::new("API_PORT must be a port number");
        assert!(config.to_string().starts_with("Configuration Error: API_PORT"));
        assert!(config.to_string().contains("error.rs"));

        let timeout = TimeoutError::new(Duration::from_secs(2));
        assert!(timeout.to_string().starts_with("Timeout Error: generation exceeded 2s"));
        assert!(timeout.to_string().contains("error.rs"));
    }
}
