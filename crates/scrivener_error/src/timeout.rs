//! Deadline errors.

use std::time::Duration;

/// Generation did not finish before the request deadline.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Timeout Error: generation exceeded {:?} at line {} in {}", limit, line, file)]
pub struct TimeoutError {
    /// The deadline that elapsed
    pub limit: Duration,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new TimeoutError at the current location.
    #[track_caller]
    pub fn new(limit: Duration) -> Self {
        let location = std::panic::Location::caller();
        Self {
            limit,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Caller-facing message.
    pub fn message(&self) -> String {
        format!("Generation timed out after {} seconds", self.limit.as_secs())
    }
}
