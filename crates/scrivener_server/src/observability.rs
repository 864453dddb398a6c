//! Logging and metrics initialization.

use crate::{LogFormat, ServerConfig};
use scrivener_error::{ConfigError, ScrivenerResult};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` or `info`
/// depending on the config's `debug` flag.
pub fn init_tracing(config: &ServerConfig) -> ScrivenerResult<()> {
    let default_level = if *config.debug() { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format() {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
    }
    .map_err(|e| ConfigError::new(format!("Failed to initialize tracing: {}", e)))?;

    info!(
        app_name = %config.app_name(),
        environment = %config.environment(),
        log_format = %config.log_format(),
        "Tracing initialized"
    );
    Ok(())
}

/// Initialize OpenTelemetry metrics with OTLP or stdout export.
///
/// Checks the `OTEL_EXPORTER` environment variable:
/// - "otlp" -> OTLP exporter to `OTEL_EXPORTER_OTLP_ENDPOINT` (default: http://localhost:4318)
/// - "stdout" or unset -> stdout exporter
///
/// Returns the provider so the caller can flush it on shutdown.
#[cfg(feature = "metrics")]
pub fn init_metrics(
    config: &ServerConfig,
    export_interval: std::time::Duration,
) -> ScrivenerResult<opentelemetry_sdk::metrics::SdkMeterProvider> {
    use opentelemetry::{KeyValue, global};
    use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
    use opentelemetry_sdk::{
        Resource,
        metrics::{PeriodicReader, SdkMeterProvider},
    };
    use opentelemetry_stdout::MetricExporter as StdoutExporter;
    use tracing::debug;

    let resource = Resource::builder_empty()
        .with_attributes([KeyValue::new("service.name", config.app_name().clone())])
        .build();

    let exporter_type = std::env::var("OTEL_EXPORTER").unwrap_or_else(|_| "stdout".to_string());
    info!(exporter_type = %exporter_type, "Selecting metrics exporter");

    let meter_provider = match exporter_type.as_str() {
        "otlp" => {
            let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4318".to_string());
            info!(endpoint = %endpoint, "Using OTLP metrics exporter");

            let exporter = OtlpExporter::builder()
                .with_http()
                .with_endpoint(&endpoint)
                .with_timeout(std::time::Duration::from_secs(10))
                .build()
                .map_err(|e| ConfigError::new(format!("Failed to create OTLP exporter: {}", e)))?;

            let reader = PeriodicReader::builder(exporter)
                .with_interval(export_interval)
                .build();
            SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(reader)
                .build()
        }
        _ => {
            let reader = PeriodicReader::builder(StdoutExporter::default())
                .with_interval(export_interval)
                .build();
            SdkMeterProvider::builder()
                .with_resource(resource)
                .with_reader(reader)
                .build()
        }
    };
    debug!("Built meter provider");

    global::set_meter_provider(meter_provider.clone());
    info!("Meter provider registered globally");
    Ok(meter_provider)
}
