//! Telemetry initialization - tracing to stderr.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "info,postboard=debug,postboard_core=debug,postboard_infra=debug";

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging.
    pub json_logs: bool,
    /// Service name recorded at startup.
    pub service_name: String,
    /// Raise the default filter to debug for Postboard crates.
    pub verbose: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: "postboard".to_string(),
            verbose: false,
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            service_name: std::env::var("POSTBOARD_SERVICE_NAME")
                .unwrap_or_else(|_| "postboard".to_string()),
            verbose: false,
        }
    }

    fn default_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_FILTER
        } else {
            QUIET_FILTER
        }
    }
}

/// Initialize tracing. `RUST_LOG` takes precedence over the built-in filter.
///
/// Logs go to stderr; stdout is reserved for rendered output.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_filter() {
        let mut config = TelemetryConfig::default();
        assert_eq!(config.default_filter(), QUIET_FILTER);

        config.verbose = true;
        assert_eq!(config.default_filter(), VERBOSE_FILTER);
    }
}
