use serde::{Deserialize, Serialize};

use super::VocabError;

pub type WordId = i64;

/// A single flashcard: a prompt term and its answer term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    pub text: String,
    pub translation: String,
}

impl WordEntry {
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && !self.translation.trim().is_empty()
    }
}

/// Trim both inputs and reject the pair if either ends up empty.
pub fn validate(text: &str, translation: &str) -> Result<(String, String), VocabError> {
    let text = text.trim();
    let translation = translation.trim();
    if text.is_empty() || translation.is_empty() {
        return Err(VocabError::Validation);
    }
    Ok((text.to_string(), translation.to_string()))
}

/// Issues entry ids from the wall clock (milliseconds), bumped past the last
/// issued id so two entries created in the same millisecond still differ.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: WordId,
}

impl IdGenerator {
    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: WordId) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> WordId {
        let now = chrono::Utc::now().timestamp_millis();
        let id = now.max(self.last + 1);
        self.last = id;
        id
    }
}
