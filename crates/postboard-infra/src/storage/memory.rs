//! In-memory storage - used as fallback when the data directory is unusable.

use std::collections::HashMap;
use std::sync::RwLock;

use postboard_core::StorageError;
use postboard_core::ports::KeyValueStorage;

/// In-memory key-value storage using a HashMap behind a RwLock.
///
/// Note: Data is lost on process exit.
pub struct InMemoryStorage {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("in-memory storage lock poisoned".to_string())
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = InMemoryStorage::new();
        storage.set("key1", "value1").unwrap();
        assert_eq!(storage.get("key1").unwrap(), Some("value1".to_string()));
    }

    #[test]
    fn test_set_overwrites() {
        let storage = InMemoryStorage::new();
        storage.set("key1", "old").unwrap();
        storage.set("key1", "new").unwrap();
        assert_eq!(storage.get("key1").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_remove() {
        let storage = InMemoryStorage::new();
        storage.set("key1", "value1").unwrap();
        storage.remove("key1").unwrap();
        assert_eq!(storage.get("key1").unwrap(), None);

        // Removing again is fine
        storage.remove("key1").unwrap();
    }
}
