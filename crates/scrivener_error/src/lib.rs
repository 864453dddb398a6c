//! Error types for the Scrivener content generation service.
//!
//! Every error records the source location where it was constructed.
//! The crate-level [`ScrivenerError`] wraps each specific error through
//! [`ScrivenerErrorKind`], so `?` works across crate boundaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod domain;
mod error;
mod generation;
mod schema;
mod server;
mod strategy;
mod timeout;

pub use config::ConfigError;
pub use domain::DomainValidationError;
pub use error::{ScrivenerError, ScrivenerErrorKind, ScrivenerResult};
pub use generation::GenerationFailure;
pub use schema::SchemaValidationError;
pub use server::ServerError;
pub use strategy::UnknownStrategyError;
pub use timeout::TimeoutError;
