//! Structural contract violations.

/// Request or response shape violates its contract.
///
/// Raised for unrecognized enum values, a missing or unexpected
/// `output_schema`, or a field of the wrong JSON type.
///
/// # Examples
///
/// ```
/// use scrivener_error::SchemaValidationError;
///
/// let err = SchemaValidationError::new("output_type must be one of: json, text");
/// assert!(err.message.contains("output_type"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Schema Validation Error: {} at line {} in {}", message, line, file)]
pub struct SchemaValidationError {
    /// The violated rule
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchemaValidationError {
    /// Create a new SchemaValidationError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
