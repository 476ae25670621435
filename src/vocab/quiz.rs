//! Quiz engine.
//!
//! A session quizzes a snapshot of the store taken at start. The first
//! prompt is always the snapshot's first entry; every later prompt is drawn
//! uniformly from the entries not yet answered, recomputed each turn, until
//! the snapshot is exhausted.

use std::collections::HashSet;
use std::fmt;

use rand::RngExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::entry::{WordEntry, WordId};
use super::VocabError;

/// Which side of the card is the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Prompt with the word, expect the translation.
    #[default]
    Forward,
    /// Prompt with the translation, expect the word.
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    pub fn prompt_of(self, entry: &WordEntry) -> &str {
        match self {
            Direction::Forward => &entry.text,
            Direction::Reverse => &entry.translation,
        }
    }

    pub fn answer_of(self, entry: &WordEntry) -> &str {
        match self {
            Direction::Forward => &entry.translation,
            Direction::Reverse => &entry.text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "word → meaning",
            Direction::Reverse => "meaning → word",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Active,
    Finished,
}

/// Running tally of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Accuracy in percent, rounded to two decimals. Zero when nothing has
    /// been answered.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let pct = self.correct as f64 / self.total as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }

    pub fn percentage_label(&self) -> String {
        if self.total == 0 {
            "0%".to_string()
        } else {
            format!("{:.2}%", self.percentage())
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.correct, self.total, self.percentage_label())
    }
}

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub expected: String,
    pub finished: bool,
}

#[derive(Debug)]
pub struct QuizSession {
    pub direction: Direction,
    snapshot: Vec<WordEntry>,
    pub answered_ids: HashSet<WordId>,
    pub current: Option<WordEntry>,
    pub correct_count: u32,
    pub total_count: u32,
    pub finished: bool,
}

impl QuizSession {
    fn new(entries: &[WordEntry], direction: Direction) -> Self {
        Self {
            direction,
            snapshot: entries.to_vec(),
            answered_ids: HashSet::new(),
            current: entries.first().cloned(),
            correct_count: 0,
            total_count: 0,
            finished: false,
        }
    }

    fn remaining(&self) -> Vec<&WordEntry> {
        self.snapshot
            .iter()
            .filter(|e| !self.answered_ids.contains(&e.id))
            .collect()
    }
}

/// Drives quiz sessions: `Idle → Active → Finished → Idle`.
///
/// The direction lives on the engine rather than the session, so a swap
/// carries over into the next session.
#[derive(Debug, Default)]
pub struct QuizEngine {
    direction: Direction,
    session: Option<QuizSession>,
}

impl QuizEngine {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            session: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        match &self.session {
            None => QuizPhase::Idle,
            Some(s) if s.finished => QuizPhase::Finished,
            Some(_) => QuizPhase::Active,
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.session.as_ref().and_then(|s| s.current.as_ref())
    }

    /// The term shown to the user for the current card.
    pub fn prompt(&self) -> Option<&str> {
        self.current().map(|e| self.direction.prompt_of(e))
    }

    pub fn score(&self) -> Score {
        self.session
            .as_ref()
            .map(|s| Score {
                correct: s.correct_count,
                total: s.total_count,
            })
            .unwrap_or_default()
    }

    /// `(answered, total)` for the running session.
    pub fn progress(&self) -> (usize, usize) {
        self.session
            .as_ref()
            .map(|s| (s.answered_ids.len(), s.snapshot.len()))
            .unwrap_or((0, 0))
    }

    pub fn remaining(&self) -> usize {
        self.session.as_ref().map(|s| s.remaining().len()).unwrap_or(0)
    }

    /// Begin a session over a snapshot of `entries`.
    pub fn start(&mut self, entries: &[WordEntry]) -> Result<(), VocabError> {
        if entries.is_empty() {
            return Err(VocabError::EmptyCollection);
        }
        self.session = Some(QuizSession::new(entries, self.direction));
        info!(words = entries.len(), direction = ?self.direction, "quiz started");
        Ok(())
    }

    pub fn toggle_direction(&mut self) -> Result<Direction, VocabError> {
        let session = match &mut self.session {
            Some(s) if !s.finished => s,
            _ => return Err(VocabError::QuizNotActive),
        };
        self.direction = self.direction.flipped();
        session.direction = self.direction;
        debug!(direction = ?self.direction, "quiz direction swapped");
        Ok(self.direction)
    }

    /// Check `raw` against the current card and advance to the next one.
    pub fn submit_answer<R: RngExt>(
        &mut self,
        raw: &str,
        rng: &mut R,
    ) -> Result<AnswerOutcome, VocabError> {
        let session = match &mut self.session {
            Some(s) if !s.finished => s,
            _ => return Err(VocabError::QuizNotActive),
        };
        let current = session.current.take().ok_or(VocabError::QuizNotActive)?;

        let expected = session.direction.answer_of(&current).to_string();
        let correct = answers_match(raw, &expected);
        session.total_count += 1;
        if correct {
            session.correct_count += 1;
        }
        session.answered_ids.insert(current.id);
        debug!(id = current.id, correct, "answer checked");

        let remaining = session.remaining();
        if remaining.is_empty() {
            session.finished = true;
            info!(
                correct = session.correct_count,
                total = session.total_count,
                "quiz finished"
            );
        } else {
            let next = remaining[rng.random_range(0..remaining.len())].clone();
            session.current = Some(next);
        }

        Ok(AnswerOutcome {
            correct,
            expected,
            finished: session.finished,
        })
    }

    /// Discard the session, whatever its state.
    pub fn end(&mut self) {
        if self.session.take().is_some() {
            info!("quiz ended");
        }
    }

    pub fn restart(&mut self, entries: &[WordEntry]) -> Result<(), VocabError> {
        self.end();
        self.start(entries)
    }
}

/// Answers match when equal after trimming and case folding.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(pairs: &[(&str, &str)]) -> Vec<WordEntry> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (text, translation))| WordEntry {
                id: i as WordId + 1,
                text: text.to_string(),
                translation: translation.to_string(),
            })
            .collect()
    }

    fn abc() -> Vec<WordEntry> {
        words(&[("apple", "りんご"), ("book", "本"), ("cat", "猫")])
    }

    #[test]
    fn test_start_requires_words() {
        let mut quiz = QuizEngine::default();
        assert_eq!(quiz.start(&[]), Err(VocabError::EmptyCollection));
        assert_eq!(quiz.phase(), QuizPhase::Idle);
    }

    #[test]
    fn test_start_presents_first_entry() {
        let mut quiz = QuizEngine::default();
        quiz.start(&abc()).unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Active);
        assert_eq!(quiz.prompt(), Some("apple"));
        assert_eq!(quiz.score(), Score::default());
        assert_eq!(quiz.progress(), (0, 3));
    }

    #[test]
    fn test_exhausts_every_word_once() {
        let entries = abc();
        for _ in 0..20 {
            let mut quiz = QuizEngine::default();
            let mut rng = rand::rng();
            quiz.start(&entries).unwrap();

            let mut seen = Vec::new();
            while quiz.phase() == QuizPhase::Active {
                seen.push(quiz.current().unwrap().id);
                quiz.submit_answer("wrong", &mut rng).unwrap();
            }

            assert_eq!(seen.len(), 3);
            assert_eq!(seen[0], entries[0].id);
            let unique: HashSet<_> = seen.iter().collect();
            assert_eq!(unique.len(), 3);
            assert_eq!(quiz.phase(), QuizPhase::Finished);
            assert!(quiz.current().is_none());
            assert_eq!(quiz.score().total, 3);
            assert_eq!(quiz.score().correct, 0);
        }
    }

    #[test]
    fn test_answer_is_trimmed_and_case_folded() {
        let entries = words(&[("りんご", "apple")]);
        let mut quiz = QuizEngine::default();
        quiz.start(&entries).unwrap();
        let outcome = quiz.submit_answer(" Apple ", &mut rand::rng()).unwrap();
        assert!(outcome.correct);
        assert!(outcome.finished);
        assert_eq!(quiz.score(), Score { correct: 1, total: 1 });
    }

    #[test]
    fn test_wrong_answer_reports_expected() {
        let mut quiz = QuizEngine::default();
        quiz.start(&abc()).unwrap();
        let outcome = quiz.submit_answer("みかん", &mut rand::rng()).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.expected, "りんご");
        assert!(!outcome.finished);
    }

    #[test]
    fn test_toggle_direction_keeps_progress() {
        let entries = abc();
        let mut quiz = QuizEngine::default();
        let mut rng = rand::rng();
        quiz.start(&entries).unwrap();
        quiz.submit_answer("りんご", &mut rng).unwrap();

        assert_eq!(quiz.toggle_direction(), Ok(Direction::Reverse));
        assert_eq!(quiz.score(), Score { correct: 1, total: 1 });
        assert_eq!(quiz.progress(), (1, 3));

        let current = quiz.current().unwrap().clone();
        assert_eq!(quiz.prompt(), Some(current.translation.as_str()));
        let outcome = quiz.submit_answer(&current.text, &mut rng).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.expected, current.text);
    }

    #[test]
    fn test_toggle_requires_active_quiz() {
        let mut quiz = QuizEngine::default();
        assert_eq!(quiz.toggle_direction(), Err(VocabError::QuizNotActive));

        quiz.start(&words(&[("a", "1")])).unwrap();
        quiz.submit_answer("1", &mut rand::rng()).unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(quiz.toggle_direction(), Err(VocabError::QuizNotActive));
        assert_eq!(
            quiz.submit_answer("1", &mut rand::rng()),
            Err(VocabError::QuizNotActive)
        );
    }

    #[test]
    fn test_snapshot_ignores_later_store_changes() {
        let mut entries = abc();
        let mut quiz = QuizEngine::default();
        quiz.start(&entries).unwrap();
        entries.clear();
        assert_eq!(quiz.progress(), (0, 3));
        assert_eq!(quiz.remaining(), 3);
        quiz.submit_answer("りんご", &mut rand::rng()).unwrap();
        assert_eq!(quiz.remaining(), 2);
    }

    #[test]
    fn test_end_and_restart() {
        let mut quiz = QuizEngine::default();
        quiz.start(&words(&[("a", "1")])).unwrap();
        quiz.submit_answer("1", &mut rand::rng()).unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Finished);

        quiz.restart(&abc()).unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Active);
        assert_eq!(quiz.score(), Score::default());
        assert_eq!(quiz.progress(), (0, 3));

        quiz.end();
        assert_eq!(quiz.phase(), QuizPhase::Idle);
        assert_eq!(quiz.restart(&[]), Err(VocabError::EmptyCollection));
        assert_eq!(quiz.phase(), QuizPhase::Idle);
    }

    #[test]
    fn test_direction_carries_into_next_session() {
        let mut quiz = QuizEngine::new(Direction::Forward);
        quiz.start(&abc()).unwrap();
        quiz.toggle_direction().unwrap();
        quiz.restart(&abc()).unwrap();
        assert_eq!(quiz.direction(), Direction::Reverse);
        assert_eq!(quiz.prompt(), Some("りんご"));
    }

    #[test]
    fn test_score_percentage() {
        let score = Score { correct: 2, total: 4 };
        assert_eq!(score.percentage(), 50.0);
        assert_eq!(score.percentage_label(), "50.00%");
        assert_eq!(score.to_string(), "2/4 (50.00%)");

        assert_eq!(Score::default().percentage_label(), "0%");
        assert_eq!(Score { correct: 1, total: 3 }.percentage_label(), "33.33%");
        assert_eq!(Score { correct: 2, total: 3 }.percentage(), 66.67);
    }
}
