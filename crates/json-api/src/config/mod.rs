//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    segments::SegmentsConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod observability;
pub(crate) mod segments;
pub(crate) mod server;

/// Cart Offer JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "cartoffer-json", about = "Cart Offer JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// User segment lookup settings.
    #[command(flatten)]
    pub segments: SegmentsConfig,
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
    use std::time::Duration;

    use cartoffer_app::domain::segments::{SegmentServiceConfig, SegmentSourceConfig};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cli_arguments_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "cartoffer-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--log-format",
            "json",
            "--segment-service-url",
            "http://segments.internal:1080",
            "--segment-service-timeout-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9100");
        assert!(matches!(
            config.logging.log_format,
            observability::LogFormat::Json
        ));
        assert_eq!(
            config.segments.source_config(),
            SegmentSourceConfig::Service(SegmentServiceConfig {
                base_url: "http://segments.internal:1080".to_owned(),
                timeout: Duration::from_millis(250),
            })
        );

        Ok(())
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = ServerConfig::try_parse_from(["cartoffer-json", "--log-format", "xml"]);

        assert!(result.is_err(), "expected unknown log format to be rejected");
    }
}
