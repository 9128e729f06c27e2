//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Showroom JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "showroom-json", about = "Showroom JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Identity provider settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn explicit_arguments_are_parsed() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "showroom-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--slow-request-threshold-ms",
            "250",
            "--database-url",
            "postgres://localhost/showroom",
            "--auth-provider-url",
            "https://auth.example.com",
            "--auth-provider-secret-key",
            "sk_test",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert_eq!(config.observability.slow_request_threshold_ms, 250);
        assert_eq!(config.auth.url, "https://auth.example.com");

        Ok(())
    }
}
