//! Vocabulary domain: word entries, the word store and the quiz engine.
//!
//! Nothing in here knows about the terminal or the filesystem. The
//! [`AppState`](crate::app::state::AppState) controller routes user input
//! into these types and turns their results into notifications and actions.

pub mod entry;
pub mod quiz;
pub mod store;

use thiserror::Error;

pub use entry::{WordEntry, WordId};
pub use quiz::{AnswerOutcome, Direction, QuizEngine, QuizPhase};
pub use store::WordStore;

/// Errors raised by store and quiz operations. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    #[error("Please enter both a word and its meaning.")]
    Validation,

    #[error("No word with id {0}")]
    NotFound(WordId),

    #[error("Add some words before starting a quiz.")]
    EmptyCollection,

    #[error("No quiz is in progress.")]
    QuizNotActive,
}
