//! Scrivener content generation server.

use clap::Parser;
use scrivener_server::{ServerConfig, init_tracing, serve};
use scrivener_strategy::StrategyRegistry;
use std::path::PathBuf;

/// Content generation service
#[derive(Debug, Parser)]
#[command(name = "scrivener", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind (overrides API_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides API_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config = config.with_api_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_api_port(port);
    }

    init_tracing(&config)?;

    #[cfg(feature = "metrics")]
    let meter_provider =
        scrivener_server::init_metrics(&config, std::time::Duration::from_secs(60))?;

    serve(config, StrategyRegistry::default()).await?;

    #[cfg(feature = "metrics")]
    if let Err(e) = meter_provider.shutdown() {
        tracing::warn!(error = %e, "Failed to flush metrics");
    }

    Ok(())
}
