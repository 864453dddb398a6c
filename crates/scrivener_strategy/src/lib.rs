//! Generation strategies for Scrivener.
//!
//! Each [`GenerationStrategy`] handles exactly one [`GenerationType`]. The
//! [`StrategyRegistry`] is built once at startup and maps discriminants to
//! strategies; [`StrategyRegistry::dispatch`] is the single entry point the
//! transport layer calls.
//!
//! # Usage
//!
//! ```
//! use scrivener_core::GenerationRequest;
//! use scrivener_strategy::StrategyRegistry;
//! use serde_json::json;
//!
//! # futures::executor::block_on(async {
//! let registry = StrategyRegistry::default();
//! let request = GenerationRequest::validate(&json!({
//!     "generation_type": "evidence_discovery",
//!     "output_type": "text",
//!     "parameters": {"content": "The sky is blue.", "claim": "The sky is blue"}
//! }))
//! .unwrap();
//! let response = registry.dispatch(&request).await.unwrap();
//! assert_eq!(response.content(), "Discovered evidence from content");
//! # });
//! ```
//!
//! [`GenerationType`]: scrivener_core::GenerationType

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod claim_discovery;
mod default;
mod evidence_discovery;
mod registry;
mod strategy;

pub use claim_discovery::ClaimDiscoveryStrategy;
pub use default::DefaultStrategy;
pub use evidence_discovery::EvidenceDiscoveryStrategy;
pub use registry::{StrategyRegistry, StrategyRegistryBuilder};
pub use strategy::GenerationStrategy;
