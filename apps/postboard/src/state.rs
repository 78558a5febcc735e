//! Application state - the store and the storage it was opened over.

use std::sync::Arc;

use postboard_core::PostStore;
use postboard_core::ports::{Clock, KeyValueStorage};
use postboard_infra::{FileStorage, InMemoryStorage, SystemClock};

use crate::config::AppConfig;

/// Everything a command needs.
pub struct AppState {
    pub store: PostStore,
}

impl AppState {
    /// Open the store over the configured data directory.
    ///
    /// If the directory cannot be prepared the store runs in memory and
    /// nothing is kept after exit.
    pub fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let storage: Arc<dyn KeyValueStorage> = match FileStorage::open(&config.data_dir) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::error!(
                    "Failed to open data directory: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryStorage::new())
            }
        };

        let store = PostStore::open(storage, clock, config.slot.clone());

        tracing::info!(
            data_dir = %config.data_dir.display(),
            slot = %store.slot(),
            posts = store.len(),
            "Application state initialized"
        );

        Self { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::TelemetryConfig;

    #[test]
    fn test_reopens_existing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            slot: "posts".to_string(),
            telemetry: TelemetryConfig::default(),
        };

        let mut state = AppState::new(&config);
        state.store.create("persisted", "yes");

        let state = AppState::new(&config);
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn test_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let config = AppConfig {
            data_dir: blocker,
            slot: "posts".to_string(),
            telemetry: TelemetryConfig::default(),
        };

        let mut state = AppState::new(&config);
        state.store.create("volatile", "post");
        assert_eq!(state.store.len(), 1);
    }
}
