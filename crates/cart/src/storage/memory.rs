//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::StorageError;

/// Ephemeral key-value storage for tests and throwaway sessions.
///
/// Cloning shares the underlying map, so a clone observes writes made
/// through the original handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before handing the storage to a store, bypassing the
    /// `SnapshotStorage` error surface.
    pub async fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
    }
}

impl super::SnapshotStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
