use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage; only logged, never read by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Settings for the assessment service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub intake: IntakeConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the `APP_*` process variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let port = match lookup("APP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        let max_body_bytes = match lookup("APP_MAX_BODY_BYTES") {
            Some(value) => parse_body_limit(value)?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            intake: IntakeConfig { max_body_bytes },
            telemetry: TelemetryConfig {
                log_level: lookup("APP_LOG_LEVEL")
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
        })
    }
}

fn parse_body_limit(value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidBodyLimit { value }),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let ip = if host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            host.parse().map_err(|source| ConfigError::InvalidHost {
                value: self.host.clone(),
                source,
            })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Limits applied to incoming assessment documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeConfig {
    pub max_body_bytes: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got '{value}'")]
    InvalidPort { value: String },
    #[error("APP_HOST must be an IP address or localhost, got '{value}'")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("APP_MAX_BODY_BYTES must be a positive byte count, got '{value}'")]
    InvalidBodyLimit { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_lookup_yields_service_defaults() {
        let config = config_from(&[]).expect("defaults load");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(
            config.server.socket_addr().expect("default host parses"),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000)
        );
        assert_eq!(config.intake, IntakeConfig::default());
        assert_eq!(config.intake.max_body_bytes, 64 * 1024);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn body_limit_is_read_from_environment() {
        let config = config_from(&[("APP_MAX_BODY_BYTES", " 2048 ")]).expect("limit parses");
        assert_eq!(config.intake.max_body_bytes, 2048);
    }

    #[test]
    fn zero_or_garbage_body_limit_is_rejected() {
        for value in ["0", "-5", "lots"] {
            let error = config_from(&[("APP_MAX_BODY_BYTES", value)])
                .expect_err("limit must be a positive count");
            assert!(
                matches!(&error, ConfigError::InvalidBodyLimit { value: v } if v == value),
                "unexpected error for {value}: {error:?}"
            );
        }
    }

    #[test]
    fn port_error_names_the_offending_value() {
        let error = config_from(&[("APP_PORT", "eighty")]).expect_err("port must be numeric");
        assert!(matches!(error, ConfigError::InvalidPort { .. }));
        assert!(error.to_string().contains("eighty"));
    }

    #[test]
    fn localhost_and_ipv6_hosts_resolve() {
        let config = config_from(&[("APP_HOST", "LocalHost"), ("APP_PORT", "8080")])
            .expect("config loads");
        assert_eq!(
            config.server.socket_addr().expect("localhost resolves"),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080)
        );

        let config = config_from(&[("APP_HOST", "::1")]).expect("config loads");
        assert!(config.server.socket_addr().expect("ipv6 parses").is_ipv6());

        let config = config_from(&[("APP_HOST", "wound-care.internal")]).expect("config loads");
        assert!(matches!(
            config.server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn production_aliases_are_recognized() {
        let config = config_from(&[("APP_ENV", " PROD ")]).expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.environment.label(), "production");

        let config = config_from(&[("APP_ENV", "ci")]).expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
    }
}
