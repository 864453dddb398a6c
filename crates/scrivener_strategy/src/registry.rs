//! Strategy registry and dispatch.

use crate::{
    ClaimDiscoveryStrategy, DefaultStrategy, EvidenceDiscoveryStrategy, GenerationStrategy,
};
use futures::FutureExt;
use scrivener_core::{GenerationRequest, GenerationResponse, GenerationType};
use scrivener_error::{
    GenerationFailure, ScrivenerErrorKind, ScrivenerResult, UnknownStrategyError,
};
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Read-only mapping from discriminant to strategy.
///
/// Built once at startup and cloned cheaply into every request handler.
/// [`StrategyRegistry::default`] registers all built-in strategies.
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: Arc<HashMap<GenerationType, Arc<dyn GenerationStrategy>>>,
}

impl StrategyRegistry {
    /// Creates a new registry builder.
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::default()
    }

    /// Look up the strategy for a discriminant.
    pub fn get(
        &self,
        generation_type: GenerationType,
    ) -> Result<Arc<dyn GenerationStrategy>, UnknownStrategyError> {
        self.strategies
            .get(&generation_type)
            .cloned()
            .ok_or_else(|| UnknownStrategyError::new(generation_type.to_string()))
    }

    /// Look up a strategy by its wire name.
    ///
    /// Unrecognized names fail the same way as unregistered types.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn GenerationStrategy>, UnknownStrategyError> {
        let generation_type =
            GenerationType::from_str(name).map_err(|_| UnknownStrategyError::new(name))?;
        self.get(generation_type)
    }

    /// Registered discriminants, sorted.
    pub fn generation_types(&self) -> Vec<GenerationType> {
        let mut types: Vec<_> = self.strategies.keys().copied().collect();
        types.sort();
        types
    }

    /// Resolve the request's strategy and run it.
    ///
    /// Validation errors (schema, unknown strategy, domain) are returned
    /// unchanged. Any other failure, including a panic inside the
    /// strategy, is converted to a [`GenerationFailure`] carrying the
    /// original message. Dropping the returned future cancels the
    /// in-flight strategy call.
    #[instrument(skip_all, fields(generation_type = %request.generation_type()))]
    pub async fn dispatch(&self, request: &GenerationRequest) -> ScrivenerResult<GenerationResponse> {
        let strategy = self.get(*request.generation_type())?;
        debug!(strategy = strategy.name(), "Dispatching generation request");

        let start = Instant::now();
        let outcome = AssertUnwindSafe(strategy.generate(request))
            .catch_unwind()
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok(response)) => {
                info!(duration_ms, "Generation completed");
                Ok(response)
            }
            Ok(Err(e)) if e.is_validation() => {
                warn!(duration_ms, error = %e, "Generation request rejected");
                Err(e)
            }
            Ok(Err(e)) => {
                error!(duration_ms, error = %e, "Generation failed");
                match e.kind() {
                    ScrivenerErrorKind::Generation(_) => Err(e),
                    _ => Err(GenerationFailure::new(e.detail()).into()),
                }
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(duration_ms, panic = %message, "Strategy panicked");
                Err(GenerationFailure::new(message).into())
            }
        }
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builder()
            .register(DefaultStrategy)
            .register(ClaimDiscoveryStrategy)
            .register(EvidenceDiscoveryStrategy)
            .build()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("generation_types", &self.generation_types())
            .finish()
    }
}

/// Builder for [`StrategyRegistry`].
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    strategies: HashMap<GenerationType, Arc<dyn GenerationStrategy>>,
}

impl StrategyRegistryBuilder {
    /// Register a strategy under its own discriminant.
    ///
    /// A later registration for the same discriminant replaces the earlier one.
    pub fn register(mut self, strategy: impl GenerationStrategy + 'static) -> Self {
        let generation_type = strategy.generation_type();
        if self
            .strategies
            .insert(generation_type, Arc::new(strategy))
            .is_some()
        {
            debug!(%generation_type, "Replaced previously registered strategy");
        }
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> StrategyRegistry {
        StrategyRegistry {
            strategies: Arc::new(self.strategies),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "strategy panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registers_all_types() {
        let registry = StrategyRegistry::default();
        assert_eq!(
            registry.generation_types(),
            vec![
                GenerationType::ClaimDiscovery,
                GenerationType::EvidenceDiscovery,
                GenerationType::Default,
            ]
        );
    }

    #[test]
    fn test_get_matches_discriminant() {
        let registry = StrategyRegistry::default();
        for generation_type in registry.generation_types() {
            let strategy = registry.get(generation_type).expect("registered");
            assert_eq!(strategy.generation_type(), generation_type);
        }
    }

    #[test]
    fn test_panic_message_extraction() {
        let boxed: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(boxed.as_ref()), "static message");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(boxed.as_ref()), "owned message");
        let boxed: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(boxed.as_ref()), "strategy panicked");
    }
}
