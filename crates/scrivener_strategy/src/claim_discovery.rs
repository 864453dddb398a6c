//! Claim discovery.

use crate::GenerationStrategy;
use async_trait::async_trait;
use scrivener_core::{GenerationRequest, GenerationResponse, GenerationType};
use scrivener_error::ScrivenerResult;
use tracing::{debug, instrument};

/// Finds the claims made in `content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimDiscoveryStrategy;

#[async_trait]
impl GenerationStrategy for ClaimDiscoveryStrategy {
    fn generation_type(&self) -> GenerationType {
        GenerationType::ClaimDiscovery
    }

    fn name(&self) -> &str {
        "claim discovery"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["content"]
    }

    #[instrument(skip_all, fields(strategy = "claim_discovery"))]
    async fn generate(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse> {
        self.validate_request(request)?;
        debug!(search_type = %request.search_type(), "Discovering claims");

        // TODO: call the language model once a driver is wired in
        Ok(GenerationResponse::for_request(
            request,
            "Discovered claims from content",
            Vec::new(),
        )?)
    }
}
