//! Persistence for the word list.
//!
//! The list lives under a single key in a key-value store. [`FileStore`]
//! keeps each key in its own JSON file; an in-memory store backs tests.
//! [`WordRepository`] sits on top and owns the rules for when a write is
//! allowed.

mod file;
#[cfg(test)]
mod memory;

use std::io;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::vocab::WordEntry;

pub use file::FileStore;
#[cfg(test)]
pub use memory::{FailingStore, MemoryStore};

/// Storage key holding the serialized word list.
pub const WORDS_KEY: &str = "flashcardWords";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed stored data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("refusing to write before the stored list has been loaded")]
    NotHydrated,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Reads and writes the word list through a [`KeyValueStore`].
///
/// Writes are refused until [`load`](Self::load) has run, so an empty
/// in-memory list can never clobber stored words at startup. After that an
/// empty list is written only when `persist_empty` is set.
pub struct WordRepository<S> {
    backend: S,
    hydrated: bool,
    persist_empty: bool,
}

impl<S: KeyValueStore> WordRepository<S> {
    pub fn new(backend: S, persist_empty: bool) -> Self {
        Self {
            backend,
            hydrated: false,
            persist_empty,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the stored list. Missing or unreadable data yields an empty list;
    /// problems are logged, never returned.
    pub fn load(&mut self) -> Vec<WordEntry> {
        self.hydrated = true;
        let raw = match self.backend.get(WORDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored word list");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored word list");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<WordEntry>>(&raw) {
            Ok(entries) => {
                info!(count = entries.len(), "loaded word list");
                entries
            }
            Err(e) => {
                warn!(error = %e, "stored word list is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Write `entries`. Returns `Ok(false)` when the write was skipped
    /// because the list is empty and `persist_empty` is off.
    pub fn persist(&mut self, entries: &[WordEntry]) -> StorageResult<bool> {
        if !self.hydrated {
            return Err(StorageError::NotHydrated);
        }
        if entries.is_empty() && !self.persist_empty {
            debug!("skipping write of empty word list");
            return Ok(false);
        }
        let value = serde_json::to_string(entries)?;
        self.backend.set(WORDS_KEY, &value)?;
        debug!(count = entries.len(), "word list saved");
        Ok(true)
    }
}
