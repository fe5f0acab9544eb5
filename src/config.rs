use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

const DEFAULT_OTLP_ENDPOINT: &str = "http://127.0.0.1:4318";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, falls back to the local collector)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl OtelConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_OTLP_ENDPOINT)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - DELEON_LISTEN
    /// - DELEON_SOCKET
    /// - DELEON_OTEL_ENDPOINT
    /// - DELEON_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("DELEON_").split("_"))
            .extract()
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            otel: OtelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::load()?;
            assert_eq!(config.listen, "127.0.0.1:3000");
            assert!(config.socket.is_none());
            assert_eq!(config.otel.environment, "development");
            assert_eq!(config.otel.endpoint(), "http://127.0.0.1:4318");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DELEON_LISTEN", "0.0.0.0:8080");
            jail.set_env("DELEON_SOCKET", "/run/deleon.sock");
            jail.set_env("DELEON_OTEL_ENDPOINT", "http://collector:4318");
            jail.set_env("DELEON_OTEL_ENVIRONMENT", "production");

            let config = Config::load()?;
            assert_eq!(config.listen, "0.0.0.0:8080");
            assert_eq!(config.socket.as_deref(), Some("/run/deleon.sock"));
            assert_eq!(config.otel.endpoint(), "http://collector:4318");
            assert_eq!(config.otel.environment, "production");
            Ok(())
        });
    }
}
