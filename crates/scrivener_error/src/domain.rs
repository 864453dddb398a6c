//! Strategy precondition failures.

/// A strategy rejected a request before generating.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Domain Validation Error: {} at line {} in {}", message, line, file)]
pub struct DomainValidationError {
    /// Human-readable reason, naming any missing parameter keys
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DomainValidationError {
    /// Create a new DomainValidationError at the current location.
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
