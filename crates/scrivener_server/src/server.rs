//! Listener lifecycle.

use crate::{ApiState, ServerConfig, create_router};
use scrivener_error::{ScrivenerResult, ServerError};
use scrivener_strategy::StrategyRegistry;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Bind the configured address and serve until Ctrl+C.
#[instrument(skip_all, fields(address = %config.bind_address()))]
pub async fn serve(config: ServerConfig, registry: StrategyRegistry) -> ScrivenerResult<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::new(format!("Failed to bind {}: {}", address, e)))?;

    info!(
        generation_types = ?registry.generation_types(),
        "Content generation service listening on http://{}", address
    );

    let router = create_router(ApiState::new(config, registry));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(format!("Server error: {}", e)))?;

    info!("Content generation service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down content generation service...");
}
