//! Strategy lookup errors.

/// No strategy is registered for a generation type.
///
/// # Examples
///
/// ```
/// use scrivener_error::UnknownStrategyError;
///
/// let err = UnknownStrategyError::new("summarize");
/// assert_eq!(err.generation_type, "summarize");
/// assert!(err.to_string().contains("summarize"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Unknown Strategy Error: no strategy found for generation type '{}' at line {} in {}",
    generation_type,
    line,
    file
)]
pub struct UnknownStrategyError {
    /// The unrecognized discriminant
    pub generation_type: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnknownStrategyError {
    /// Create a new UnknownStrategyError at the current location.
    #[track_caller]
    pub fn new(generation_type: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            generation_type: generation_type.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Caller-facing message.
    pub fn message(&self) -> String {
        format!(
            "No strategy found for generation type: {}",
            self.generation_type
        )
    }
}
