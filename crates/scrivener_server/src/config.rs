//! Server configuration.
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file,
//! environment variables (a `.env` file is loaded first), then CLI flags.

use derive_getters::Getters;
use scrivener_error::{ConfigError, ScrivenerResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, instrument};

/// Log output format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Process-wide configuration, constructed once in `main`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ServerConfig {
    /// Service name used in logs and metrics
    app_name: String,
    /// Deployment environment label
    environment: String,
    /// Enables debug-level logging when `RUST_LOG` is unset
    debug: bool,
    /// Interface to bind
    api_host: String,
    /// Port to bind
    api_port: u16,
    /// Upper bound on a single generation
    generation_timeout_secs: u64,
    /// Log output format
    log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            app_name: "content-generation-service".to_string(),
            environment: "development".to_string(),
            debug: true,
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            generation_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional TOML file plus the environment.
    #[instrument]
    pub fn load(path: Option<&Path>) -> ScrivenerResult<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!(path = %env_file.display(), "Loaded .env file");
        }

        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env()
    }

    /// Load configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScrivenerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Ok(toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?)
    }

    /// Apply overrides from process environment variables.
    pub fn with_env(self) -> ScrivenerResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// Reads `APP_NAME`, `ENVIRONMENT`, `DEBUG`, `API_HOST`, `API_PORT`,
    /// `GENERATION_TIMEOUT_SECS` and `LOG_FORMAT`.
    pub fn with_overrides<F>(mut self, lookup: F) -> ScrivenerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("APP_NAME") {
            self.app_name = value;
        }
        if let Some(value) = lookup("ENVIRONMENT") {
            self.environment = value;
        }
        if let Some(value) = lookup("DEBUG") {
            self.debug = parse_bool("DEBUG", &value)?;
        }
        if let Some(value) = lookup("API_HOST") {
            self.api_host = value;
        }
        if let Some(value) = lookup("API_PORT") {
            self.api_port = parse_value("API_PORT", &value)?;
        }
        if let Some(value) = lookup("GENERATION_TIMEOUT_SECS") {
            self.generation_timeout_secs = parse_value("GENERATION_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = lookup("LOG_FORMAT") {
            self.log_format = parse_value("LOG_FORMAT", &value.to_lowercase())?;
        }
        Ok(self)
    }

    /// Override the bind host.
    pub fn with_api_host(self, api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            ..self
        }
    }

    /// Override the bind port.
    pub fn with_api_port(self, api_port: u16) -> Self {
        Self { api_port, ..self }
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// Deadline for a single generation.
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::new(format!(
            "{} must be true or false, got '{}'",
            key, value
        ))),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::new(format!("{} has an invalid value '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.app_name(), "content-generation-service");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.generation_timeout(), Duration::from_secs(30));
        assert_eq!(*config.log_format(), LogFormat::Pretty);
        assert!(*config.debug());
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .with_overrides(lookup(&[
                ("API_HOST", "127.0.0.1"),
                ("API_PORT", "9000"),
                ("DEBUG", "False"),
                ("LOG_FORMAT", "JSON"),
                ("GENERATION_TIMEOUT_SECS", "5"),
            ]))
            .expect("valid overrides");
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(!*config.debug());
        assert_eq!(*config.log_format(), LogFormat::Json);
        assert_eq!(config.generation_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_port_names_variable() {
        let err = ServerConfig::default()
            .with_overrides(lookup(&[("API_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.detail().contains("API_PORT"));
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let err = ServerConfig::default()
            .with_overrides(lookup(&[("DEBUG", "maybe")]))
            .unwrap_err();
        assert!(err.detail().contains("DEBUG"));
    }

    #[test]
    fn test_builder_fills_defaults() {
        let config = ServerConfigBuilder::default()
            .api_port(8123_u16)
            .build()
            .expect("all fields default");
        assert_eq!(config.api_port(), &8123);
        assert_eq!(config.environment(), "development");
    }

    #[test]
    fn test_cli_overrides() {
        let config = ServerConfig::default()
            .with_api_host("localhost")
            .with_api_port(1234);
        assert_eq!(config.bind_address(), "localhost:1234");
    }
}
