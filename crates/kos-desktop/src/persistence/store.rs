//! Key-value store abstraction for geometry records

use std::collections::HashMap;
use thiserror::Error;

/// Error from a geometry store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store is missing (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading the key failed
    #[error("storage read failed: {0}")]
    Read(String),
    /// Writing the key failed (quota, private mode)
    #[error("storage write failed: {0}")]
    Write(String),
    /// Records could not be encoded or decoded
    #[error("record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string key-value store holding serialized geometry records
pub trait GeometryStore {
    /// Read the value under `key` (None = never written)
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used natively and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one entry already present
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Get the raw value under a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl GeometryStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        assert!(store.load("windowPositions").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_load() {
        let mut store = MemoryStore::new();
        store.save("windowPositions", "[]").unwrap();
        assert_eq!(store.load("windowPositions").unwrap().as_deref(), Some("[]"));

        store.save("windowPositions", "[1]").unwrap();
        assert_eq!(store.get("windowPositions"), Some("[1]"));
    }

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::Write("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage write failed: quota exceeded");
    }
}
