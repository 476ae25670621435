use std::collections::HashMap;
use std::io;

use super::{KeyValueStore, StorageResult};

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend whose reads and writes always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied").into())
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "write denied").into())
    }
}
