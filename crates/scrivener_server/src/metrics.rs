//! Metrics collection for generation requests.
//!
//! Available with the `metrics` feature.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use tracing::debug;

/// Meter name shared by every generation instrument.
pub const METER_NAME: &str = "scrivener_generation";

/// Request-level metrics labelled by generation type.
#[derive(Clone)]
pub struct GenerationMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total generation requests dispatched
    pub requests: Counter<u64>,
    /// Total generation requests that failed
    pub failures: Counter<u64>,
    /// Dispatch duration in seconds
    pub duration: Histogram<f64>,
}

impl GenerationMetrics {
    /// Create new generation metrics.
    pub fn new() -> Self {
        let meter = global::meter(METER_NAME);
        debug!("Building generation metrics instruments");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("generation.requests")
                .with_description("Total generation requests")
                .build(),
            failures: meter
                .u64_counter("generation.failures")
                .with_description("Total failed generation requests")
                .build(),
            duration: meter
                .f64_histogram("generation.duration")
                .with_unit("seconds")
                .with_description("Generation dispatch duration")
                .build(),
        }
    }

    /// Record one dispatched request.
    pub fn record_request(&self, generation_type: &str, duration_secs: f64, success: bool) {
        let labels = &[KeyValue::new("generation_type", generation_type.to_string())];
        debug!(
            generation_type,
            duration_secs, success, "Recording generation metrics"
        );
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
        if !success {
            self.failures.add(1, labels);
        }
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::new()
    }
}
