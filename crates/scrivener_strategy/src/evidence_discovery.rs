//! Evidence discovery.

use crate::GenerationStrategy;
use async_trait::async_trait;
use scrivener_core::{GenerationRequest, GenerationResponse, GenerationType};
use scrivener_error::ScrivenerResult;
use tracing::{debug, instrument};

/// Finds evidence in `content` for a given `claim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvidenceDiscoveryStrategy;

#[async_trait]
impl GenerationStrategy for EvidenceDiscoveryStrategy {
    fn generation_type(&self) -> GenerationType {
        GenerationType::EvidenceDiscovery
    }

    fn name(&self) -> &str {
        "evidence discovery"
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        &["content", "claim"]
    }

    #[instrument(skip_all, fields(strategy = "evidence_discovery"))]
    async fn generate(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse> {
        self.validate_request(request)?;
        debug!(search_type = %request.search_type(), "Discovering evidence");

        // TODO: call the language model once a driver is wired in
        Ok(GenerationResponse::for_request(
            request,
            "Discovered evidence from content",
            Vec::new(),
        )?)
    }
}
