//! HTTP API for content generation and health checks.

#[cfg(feature = "metrics")]
use crate::metrics::GenerationMetrics;
use crate::{ApiError, ServerConfig};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use scrivener_core::{GenerationRequest, GenerationResponse};
use scrivener_error::{SchemaValidationError, TimeoutError};
use scrivener_strategy::StrategyRegistry;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, instrument};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Strategy lookup, read-only after startup.
    pub registry: StrategyRegistry,
    /// Process configuration.
    pub config: Arc<ServerConfig>,
    /// Generation metrics.
    #[cfg(feature = "metrics")]
    pub metrics: Arc<GenerationMetrics>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(config: ServerConfig, registry: StrategyRegistry) -> Self {
        Self {
            registry,
            config: Arc::new(config),
            #[cfg(feature = "metrics")]
            metrics: Arc::new(GenerationMetrics::new()),
        }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    let generation = Router::new().route("/generate", post(generate_content));

    Router::new()
        .route("/", get(root))
        .route("/api/v1/health", get(health_check))
        .nest("/api/v1/generation", generation)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Service banner.
async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to Content Generation Service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Validate the body, dispatch it, and bound the call by the configured timeout.
///
/// Dropping this future (client disconnect) or hitting the timeout drops
/// the in-flight strategy call with it.
#[instrument(skip_all)]
async fn generate_content(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<GenerationResponse>, ApiError> {
    let raw: Value = serde_json::from_slice(&body).map_err(|e| {
        SchemaValidationError::new(format!("request body is not valid JSON: {}", e))
    })?;
    let request = GenerationRequest::validate(&raw)?;
    debug!(generation_type = %request.generation_type(), "Request accepted");

    #[cfg(feature = "metrics")]
    let start = std::time::Instant::now();

    let limit = state.config.generation_timeout();
    let result = match tokio::time::timeout(limit, state.registry.dispatch(&request)).await {
        Ok(result) => result,
        Err(_) => Err(TimeoutError::new(limit).into()),
    };

    #[cfg(feature = "metrics")]
    state.metrics.record_request(
        &request.generation_type().to_string(),
        start.elapsed().as_secs_f64(),
        result.is_ok(),
    );

    Ok(Json(result?))
}
