//! Default generation.

use crate::GenerationStrategy;
use async_trait::async_trait;
use scrivener_core::{GenerationRequest, GenerationResponse, GenerationType};
use scrivener_error::ScrivenerResult;
use tracing::{debug, instrument};

/// General-purpose generation over `content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

#[async_trait]
impl GenerationStrategy for DefaultStrategy {
    fn generation_type(&self) -> GenerationType {
        GenerationType::Default
    }

    fn name(&self) -> &str {
        "default"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["content"]
    }

    #[instrument(skip_all, fields(strategy = "default"))]
    async fn generate(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse> {
        self.validate_request(request)?;
        debug!(search_type = %request.search_type(), "Generating with default strategy");

        // TODO: call the language model once a driver is wired in
        Ok(GenerationResponse::for_request(
            request,
            "Generated content using default strategy",
            Vec::new(),
        )?)
    }
}
