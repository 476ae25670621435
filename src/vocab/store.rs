//! The word store: an ordered list of [`WordEntry`] values.
//!
//! Insertion order is display order. Ids are unique and never change once
//! issued; edits replace text and translation in place.

use std::collections::HashSet;

use tracing::{info, warn};

use super::entry::{validate, IdGenerator, WordEntry, WordId};
use super::VocabError;

#[derive(Debug, Default)]
pub struct WordStore {
    entries: Vec<WordEntry>,
    ids: IdGenerator,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from a persisted snapshot.
    ///
    /// Entries with a blank field or a duplicate id are dropped; the rest are
    /// trimmed and kept in their stored order.
    pub fn from_entries(stored: Vec<WordEntry>) -> Self {
        let mut store = Self::new();
        let mut seen = HashSet::new();
        for entry in stored {
            if !entry.is_valid() {
                warn!(id = entry.id, "dropping stored word with an empty field");
                continue;
            }
            if !seen.insert(entry.id) {
                warn!(id = entry.id, "dropping stored word with a duplicate id");
                continue;
            }
            store.ids.observe(entry.id);
            store.entries.push(WordEntry {
                id: entry.id,
                text: entry.text.trim().to_string(),
                translation: entry.translation.trim().to_string(),
            });
        }
        store
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: WordId) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: WordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Append a new entry built from trimmed input.
    pub fn add(&mut self, text: &str, translation: &str) -> Result<&WordEntry, VocabError> {
        let (text, translation) = validate(text, translation)?;
        let entry = WordEntry {
            id: self.ids.next_id(),
            text,
            translation,
        };
        info!(id = entry.id, "word added");
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the text and translation of an existing entry, keeping its id
    /// and position.
    pub fn edit(&mut self, id: WordId, text: &str, translation: &str) -> Result<&WordEntry, VocabError> {
        let (text, translation) = validate(text, translation)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(VocabError::NotFound(id))?;
        entry.text = text;
        entry.translation = translation;
        info!(id, "word edited");
        Ok(entry)
    }

    /// Remove the entry with `id`. Absent ids are ignored.
    pub fn delete(&mut self, id: WordId) -> Option<WordEntry> {
        let idx = self.position(id)?;
        info!(id, "word deleted");
        Some(self.entries.remove(idx))
    }
}
