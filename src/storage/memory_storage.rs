use crate::storage::{Storage, StorageError};
use dashmap::DashMap;

/// Keeps every key in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new()
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
