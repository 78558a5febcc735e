//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use postboard_core::DEFAULT_SLOT;

use crate::cli::Cli;
use crate::telemetry::TelemetryConfig;

const DEFAULT_DATA_DIR: &str = ".postboard";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub slot: String,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("POSTBOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            slot: env::var("POSTBOARD_SLOT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SLOT.to_string()),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(slot) = &cli.slot {
            self.slot = slot.clone();
        }
        self.telemetry.verbose |= cli.verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides() {
        let base = AppConfig {
            data_dir: PathBuf::from("/from/env"),
            slot: "posts".to_string(),
            telemetry: TelemetryConfig::default(),
        };
        let cli = Cli::parse_from(["postboard", "--data-dir", "/tmp/pb", "-v", "list"]);

        let config = base.with_cli(&cli);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/pb"));
        assert_eq!(config.slot, "posts");
        assert!(config.telemetry.verbose);
    }
}
