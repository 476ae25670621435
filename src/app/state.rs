use crate::app::action::Action;
use crate::app::input::InputState;
use crate::config::AppConfig;
use crate::vocab::{AnswerOutcome, QuizEngine, QuizPhase, VocabError, WordId, WordStore};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    WordField,
    TranslationField,
    WordList,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditField {
    Word,
    Translation,
}

/// A modal awaiting confirmation. While one is open it captures all input.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Edit {
        id: WordId,
        word: InputState,
        translation: InputState,
        field: EditField,
    },
    ConfirmDelete {
        id: WordId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub posted_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: WordStore,
    pub quiz: QuizEngine,
    pub word_input: InputState,
    pub translation_input: InputState,
    pub answer_input: InputState,
    pub focus: FocusPanel,
    pub selected: usize,
    pub dialog: Option<Dialog>,
    pub notification: Option<Notification>,
    pub last_outcome: Option<AnswerOutcome>,
    pub pending_actions: Vec<Action>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, store: WordStore) -> Self {
        let quiz = QuizEngine::new(config.quiz.default_direction);
        Self {
            config,
            store,
            quiz,
            word_input: InputState::new(),
            translation_input: InputState::new(),
            answer_input: InputState::new(),
            focus: FocusPanel::WordField,
            selected: 0,
            dialog: None,
            notification: None,
            last_outcome: None,
            pending_actions: Vec::new(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn quiz_mode(&self) -> bool {
        self.quiz.is_running()
    }

    pub fn notify(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.notification = Some(Notification {
            kind,
            text: text.into(),
            posted_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the notification once it has been visible for the configured time.
    pub fn expire_notification(&mut self, now: Instant) {
        let ttl = Duration::from_secs(self.config.ui.notification_secs);
        if let Some(n) = &self.notification {
            if now.duration_since(n.posted_at) >= ttl {
                self.notification = None;
                self.dirty = true;
            }
        }
    }

    fn request_persist(&mut self) {
        self.pending_actions.push(Action::PersistWords);
    }

    // ---- Word list ----

    pub fn add_word(&mut self) {
        let added = self
            .store
            .add(&self.word_input.text, &self.translation_input.text)
            .map(|_| ());
        match added {
            Ok(()) => {
                self.word_input.clear();
                self.translation_input.clear();
                self.focus = FocusPanel::WordField;
                self.selected = self.store.len() - 1;
                self.request_persist();
                self.notify(NotificationKind::Success, "Word added.");
            }
            Err(e) => self.notify(NotificationKind::Error, e.to_string()),
        }
    }

    pub fn selected_id(&self) -> Option<WordId> {
        self.store.entries().get(self.selected).map(|e| e.id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.store.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.store.len() {
            self.selected = self.store.len().saturating_sub(1);
        }
    }

    /// Open the edit dialog prefilled with the entry's current values.
    pub fn request_edit(&mut self, id: WordId) {
        if let Some(entry) = self.store.get(id) {
            self.dialog = Some(Dialog::Edit {
                id,
                word: InputState::with_text(&entry.text),
                translation: InputState::with_text(&entry.translation),
                field: EditField::Word,
            });
            self.dirty = true;
        }
    }

    /// Apply the edit dialog. A validation failure keeps the dialog open.
    pub fn confirm_edit(&mut self) {
        let Some(Dialog::Edit {
            id,
            word,
            translation,
            ..
        }) = &self.dialog
        else {
            return;
        };
        let id = *id;
        let edited = self.store.edit(id, &word.text, &translation.text).map(|_| ());
        match edited {
            Ok(()) => {
                self.dialog = None;
                self.request_persist();
                self.notify(NotificationKind::Success, "Word updated.");
            }
            Err(VocabError::NotFound(_)) => {
                debug!(id, "edited word no longer exists");
                self.dialog = None;
                self.dirty = true;
            }
            Err(e) => self.notify(NotificationKind::Error, e.to_string()),
        }
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.dialog, Some(Dialog::Edit { .. })) {
            self.dialog = None;
            self.dirty = true;
        }
    }

    pub fn request_delete(&mut self, id: WordId) {
        if self.store.get(id).is_some() {
            self.dialog = Some(Dialog::ConfirmDelete { id });
            self.dirty = true;
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(Dialog::ConfirmDelete { id }) = self.dialog else {
            return;
        };
        self.dialog = None;
        if self.store.delete(id).is_some() {
            self.clamp_selection();
            self.request_persist();
            self.notify(NotificationKind::Success, "Word deleted.");
        }
        self.dirty = true;
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.dialog, Some(Dialog::ConfirmDelete { .. })) {
            self.dialog = None;
            self.dirty = true;
        }
    }

    // ---- Quiz ----

    pub fn toggle_quiz(&mut self) {
        if self.quiz_mode() {
            self.end_quiz();
        } else {
            self.start_quiz();
        }
    }

    pub fn start_quiz(&mut self) {
        match self.quiz.start(self.store.entries()) {
            Ok(()) => self.reset_quiz_view(),
            Err(e) => self.notify(NotificationKind::Error, e.to_string()),
        }
    }

    pub fn restart_quiz(&mut self) {
        match self.quiz.restart(self.store.entries()) {
            Ok(()) => self.reset_quiz_view(),
            Err(e) => {
                self.reset_quiz_view();
                self.notify(NotificationKind::Error, e.to_string());
            }
        }
    }

    pub fn end_quiz(&mut self) {
        self.quiz.end();
        self.reset_quiz_view();
    }

    fn reset_quiz_view(&mut self) {
        self.answer_input.clear();
        self.last_outcome = None;
        self.dirty = true;
    }

    pub fn toggle_direction(&mut self) {
        if let Ok(direction) = self.quiz.toggle_direction() {
            self.notify(
                NotificationKind::Info,
                format!("Direction: {}", direction.label()),
            );
        }
    }

    pub fn submit_answer(&mut self) {
        if self.quiz.phase() != QuizPhase::Active {
            return;
        }
        let raw = self.answer_input.take_text();
        let Ok(outcome) = self.quiz.submit_answer(&raw, &mut rand::rng()) else {
            return;
        };
        if outcome.correct {
            self.notify(NotificationKind::Success, "Correct!");
        } else {
            self.notify(
                NotificationKind::Error,
                format!("Incorrect. The answer was \"{}\".", outcome.expected),
            );
        }
        self.last_outcome = Some(outcome);
    }

    pub fn status_line(&self) -> String {
        if self.quiz_mode() {
            let (answered, total) = self.quiz.progress();
            format!("Quiz {}/{} | Score {}", answered, total, self.quiz.score())
        } else {
            match self.store.len() {
                1 => "1 word".to_string(),
                n => format!("{} words", n),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(words: &[(&str, &str)]) -> AppState {
        let mut store = WordStore::new();
        for (text, translation) in words {
            store.add(text, translation).unwrap();
        }
        AppState::new(AppConfig::default(), store)
    }

    fn type_form(state: &mut AppState, word: &str, translation: &str) {
        state.word_input = InputState::with_text(word);
        state.translation_input = InputState::with_text(translation);
    }

    #[test]
    fn test_add_word_clears_form_and_requests_persist() {
        let mut state = state_with(&[]);
        type_form(&mut state, " apple ", " りんご ");
        state.add_word();

        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.entries()[0].text, "apple");
        assert!(state.word_input.text.is_empty());
        assert!(state.translation_input.text.is_empty());
        assert_eq!(state.pending_actions, vec![Action::PersistWords]);
        assert_eq!(state.notification.as_ref().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    fn test_add_invalid_keeps_input_and_reports() {
        let mut state = state_with(&[]);
        type_form(&mut state, "apple", "   ");
        state.add_word();

        assert!(state.store.is_empty());
        assert_eq!(state.word_input.text, "apple");
        assert!(state.pending_actions.is_empty());
        let note = state.notification.as_ref().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.text, VocabError::Validation.to_string());
    }

    #[test]
    fn test_edit_dialog_flow() {
        let mut state = state_with(&[("a", "1"), ("b", "2")]);
        let id = state.store.entries()[1].id;
        state.request_edit(id);

        if let Some(Dialog::Edit { word, translation, .. }) = &mut state.dialog {
            assert_eq!(word.text, "b");
            *word = InputState::with_text("bee");
            *translation = InputState::with_text(" ");
        } else {
            panic!("edit dialog not open");
        }
        state.confirm_edit();
        assert!(state.dialog.is_some());
        assert_eq!(state.store.get(id).unwrap().text, "b");

        if let Some(Dialog::Edit { translation, .. }) = &mut state.dialog {
            *translation = InputState::with_text("蜂");
        }
        state.confirm_edit();
        assert!(state.dialog.is_none());
        assert_eq!(state.store.get(id).unwrap().translation, "蜂");
        assert_eq!(state.store.position(id), Some(1));
        assert_eq!(state.pending_actions, vec![Action::PersistWords]);
    }

    #[test]
    fn test_cancel_edit_changes_nothing() {
        let mut state = state_with(&[("a", "1")]);
        let id = state.store.entries()[0].id;
        state.request_edit(id);
        state.cancel_edit();
        assert!(state.dialog.is_none());
        assert_eq!(state.store.get(id).unwrap().text, "a");
        assert!(state.pending_actions.is_empty());
    }

    #[test]
    fn test_edit_of_vanished_word_is_silent() {
        let mut state = state_with(&[("a", "1")]);
        let id = state.store.entries()[0].id;
        state.request_edit(id);
        state.store.delete(id);
        state.confirm_edit();
        assert!(state.dialog.is_none());
        assert!(state.notification.is_none());
        assert!(state.pending_actions.is_empty());
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut state = state_with(&[("a", "1"), ("b", "2")]);
        let id = state.store.entries()[1].id;
        state.selected = 1;

        state.request_delete(id);
        state.cancel_delete();
        assert_eq!(state.store.len(), 2);

        state.request_delete(id);
        assert_eq!(state.dialog, Some(Dialog::ConfirmDelete { id }));
        state.confirm_delete();
        assert!(state.dialog.is_none());
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(state.pending_actions, vec![Action::PersistWords]);
    }

    #[test]
    fn test_request_delete_of_unknown_id_is_ignored() {
        let mut state = state_with(&[("a", "1")]);
        state.request_delete(-1);
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_quiz_on_empty_store_reports_error() {
        let mut state = state_with(&[]);
        state.toggle_quiz();
        assert!(!state.quiz_mode());
        assert_eq!(
            state.notification.as_ref().unwrap().text,
            VocabError::EmptyCollection.to_string()
        );
    }

    #[test]
    fn test_quiz_round() {
        let mut state = state_with(&[("apple", "りんご"), ("book", "本")]);
        state.toggle_quiz();
        assert!(state.quiz_mode());
        assert_eq!(state.quiz.prompt(), Some("apple"));

        state.answer_input = InputState::with_text("りんご");
        state.submit_answer();
        assert!(state.last_outcome.as_ref().unwrap().correct);
        assert!(state.answer_input.text.is_empty());

        state.answer_input = InputState::with_text("nope");
        state.submit_answer();
        let outcome = state.last_outcome.clone().unwrap();
        assert!(!outcome.correct);
        assert!(outcome.finished);
        assert_eq!(
            state.notification.as_ref().unwrap().text,
            "Incorrect. The answer was \"本\"."
        );
        assert_eq!(state.quiz.phase(), QuizPhase::Finished);
        assert_eq!(state.quiz.score().percentage_label(), "50.00%");

        state.restart_quiz();
        assert_eq!(state.quiz.phase(), QuizPhase::Active);
        assert!(state.last_outcome.is_none());

        state.toggle_quiz();
        assert!(!state.quiz_mode());
    }

    #[test]
    fn test_notification_expires() {
        let mut state = state_with(&[]);
        state.notify(NotificationKind::Info, "hello");
        let posted = state.notification.as_ref().unwrap().posted_at;
        state.expire_notification(posted + Duration::from_secs(1));
        assert!(state.notification.is_some());
        state.expire_notification(posted + Duration::from_secs(3));
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_status_line() {
        let mut state = state_with(&[("a", "1")]);
        assert_eq!(state.status_line(), "1 word");
        state.start_quiz();
        assert_eq!(state.status_line(), "Quiz 0/1 | Score 0/0 (0%)");
    }
}
