//! The strategy trait.

use async_trait::async_trait;
use scrivener_core::{GenerationRequest, GenerationResponse, GenerationType, missing_parameters};
use scrivener_error::{DomainValidationError, ScrivenerResult};

/// One generation behavior for one discriminant.
///
/// Strategies are stateless and shared across concurrent requests.
/// `generate` is asynchronous so implementations may await I/O such as
/// outbound search calls; whatever they do, they must call
/// [`validate_request`](GenerationStrategy::validate_request) first so
/// that missing parameters fail before any work starts.
///
/// # Example
///
/// ```rust,ignore
/// use scrivener_strategy::GenerationStrategy;
/// use async_trait::async_trait;
///
/// struct Summarize;
///
/// #[async_trait]
/// impl GenerationStrategy for Summarize {
///     fn generation_type(&self) -> GenerationType {
///         GenerationType::Default
///     }
///
///     fn name(&self) -> &str {
///         "summarize"
///     }
///
///     fn required_parameters(&self) -> &'static [&'static str] {
///         &["content"]
///     }
///
///     async fn generate(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse> {
///         self.validate_request(request)?;
///         Ok(GenerationResponse::for_request(request, "summary", Vec::new())?)
///     }
/// }
/// ```
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    /// The discriminant this strategy serves.
    fn generation_type(&self) -> GenerationType;

    /// Human-readable name for logs and error messages.
    fn name(&self) -> &str;

    /// Keys that must be present and non-blank in `parameters`.
    fn required_parameters(&self) -> &'static [&'static str];

    /// Check strategy preconditions.
    ///
    /// # Errors
    ///
    /// Returns a domain validation error when the request's discriminant
    /// is not [`generation_type`](GenerationStrategy::generation_type), or
    /// when required parameters are missing. All missing keys are named.
    fn validate_request(&self, request: &GenerationRequest) -> ScrivenerResult<()> {
        if *request.generation_type() != self.generation_type() {
            return Err(DomainValidationError::new(format!(
                "Invalid generation type '{}' for {} strategy",
                request.generation_type(),
                self.name()
            ))
            .into());
        }

        let missing = missing_parameters(request.parameters(), self.required_parameters());
        if !missing.is_empty() {
            return Err(DomainValidationError::new(format!(
                "Missing required parameters for {}: {}",
                self.generation_type(),
                missing.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Validate, then produce a response.
    async fn generate(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse>;
}
