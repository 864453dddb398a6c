//! Unexpected generation failures.

/// Wraps any unanticipated failure raised while a strategy runs.
///
/// # Examples
///
/// ```
/// use scrivener_error::GenerationFailure;
///
/// let err = GenerationFailure::new("upstream search returned garbage");
/// assert!(err.message.starts_with("Failed to generate content"));
/// assert!(err.message.contains("garbage"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Generation Failure: {} at line {} in {}", message, line, file)]
pub struct GenerationFailure {
    /// Wrapped message, embedding the original failure
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationFailure {
    /// Wrap the message of an unexpected failure.
    #[track_caller]
    pub fn new(cause: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("Failed to generate content: {}", cause),
            line: location.line(),
            file: location.file(),
        }
    }
}
