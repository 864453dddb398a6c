//! HTTP server for the Scrivener content generation service.
//!
//! Exposes `POST /api/v1/generation/generate`, `GET /api/v1/health` and
//! `GET /`. The router validates each body against the request contract
//! and hands it to a [`StrategyRegistry`](scrivener_strategy::StrategyRegistry).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
#[cfg(feature = "metrics")]
mod metrics;
mod observability;
mod server;

pub use api::{ApiState, create_router};
pub use config::{LogFormat, ServerConfig, ServerConfigBuilder, ServerConfigBuilderError};
pub use error::ApiError;
#[cfg(feature = "metrics")]
pub use metrics::{GenerationMetrics, METER_NAME};
#[cfg(feature = "metrics")]
pub use observability::init_metrics;
pub use observability::init_tracing;
pub use server::serve;
