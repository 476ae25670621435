use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::input::InputState;
use crate::app::state::*;
use crate::vocab::QuizPhase;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let mut actions = match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_notification(Instant::now());
            vec![]
        }
    };

    // Drain side effects queued by state methods
    actions.append(&mut state.pending_actions);
    actions
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    // Dialogs capture all input while open
    if state.dialog.is_some() {
        handle_dialog_key(state, key);
        return vec![];
    }

    // F2 toggles quiz mode
    if key.code == KeyCode::F(2) {
        state.toggle_quiz();
        return vec![];
    }

    if state.quiz_mode() {
        handle_quiz_key(state, key);
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            state.focus = match state.focus {
                FocusPanel::WordField => FocusPanel::TranslationField,
                FocusPanel::TranslationField => FocusPanel::WordList,
                FocusPanel::WordList => FocusPanel::WordField,
            };
            return vec![];
        }
        KeyCode::BackTab => {
            state.focus = match state.focus {
                FocusPanel::WordField => FocusPanel::WordList,
                FocusPanel::TranslationField => FocusPanel::WordField,
                FocusPanel::WordList => FocusPanel::TranslationField,
            };
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::WordField | FocusPanel::TranslationField => handle_form_key(state, key),
        FocusPanel::WordList => handle_list_key(state, key),
    }
    vec![]
}

/// Shared line-editing keys. Returns false when the key is not an edit.
fn edit_input(input: &mut InputState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('w') => {
                input.delete_word_back();
                true
            }
            KeyCode::Char('a') => {
                input.move_home();
                true
            }
            KeyCode::Char('e') => {
                input.move_end();
                true
            }
            KeyCode::Char('u') => {
                input.clear();
                true
            }
            _ => false,
        };
    }
    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        state.add_word();
        return;
    }
    let input = if state.focus == FocusPanel::WordField {
        &mut state.word_input
    } else {
        &mut state.translation_input
    };
    edit_input(input, key);
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home => state.select_first(),
        KeyCode::End => state.select_last(),
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = state.selected_id() {
                state.request_edit(id);
            }
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            if let Some(id) = state.selected_id() {
                state.request_delete(id);
            }
        }
        _ => {}
    }
}

fn handle_dialog_key(state: &mut AppState, key: KeyEvent) {
    if matches!(state.dialog, Some(Dialog::ConfirmDelete { .. })) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => state.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => state.cancel_delete(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => state.cancel_edit(),
        KeyCode::Enter => state.confirm_edit(),
        _ => {
            let Some(Dialog::Edit {
                word,
                translation,
                field,
                ..
            }) = &mut state.dialog
            else {
                return;
            };
            match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    *field = match *field {
                        EditField::Word => EditField::Translation,
                        EditField::Translation => EditField::Word,
                    };
                }
                _ => {
                    let input = match *field {
                        EditField::Word => word,
                        EditField::Translation => translation,
                    };
                    edit_input(input, key);
                }
            }
        }
    }
}

fn handle_quiz_key(state: &mut AppState, key: KeyEvent) {
    match state.quiz.phase() {
        QuizPhase::Active => {
            if key.code == KeyCode::F(3)
                || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s'))
            {
                state.toggle_direction();
                return;
            }
            match key.code {
                KeyCode::Enter => state.submit_answer(),
                KeyCode::Esc => state.end_quiz(),
                _ => {
                    edit_input(&mut state.answer_input, key);
                }
            }
        }
        QuizPhase::Finished => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => state.restart_quiz(),
            KeyCode::Esc | KeyCode::Char('q') => state.end_quiz(),
            _ => {}
        },
        QuizPhase::Idle => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::vocab::{Direction, WordStore};

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(state: &mut AppState, c: char) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn empty_state() -> AppState {
        AppState::new(AppConfig::default(), WordStore::new())
    }

    fn add_via_keys(state: &mut AppState, word: &str, translation: &str) -> Vec<Action> {
        state.focus = FocusPanel::WordField;
        type_str(state, word);
        press(state, KeyCode::Tab);
        type_str(state, translation);
        press(state, KeyCode::Enter)
    }

    #[test]
    fn test_add_word_with_keys() {
        let mut state = empty_state();
        let actions = add_via_keys(&mut state, "dog", "犬");
        assert_eq!(actions, vec![Action::PersistWords]);
        assert_eq!(state.store.entries()[0].text, "dog");
        assert_eq!(state.store.entries()[0].translation, "犬");
        assert_eq!(state.focus, FocusPanel::WordField);
    }

    #[test]
    fn test_enter_with_blank_field_persists_nothing() {
        let mut state = empty_state();
        type_str(&mut state, "dog");
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = empty_state();
        assert_eq!(ctrl(&mut state, 'c'), vec![Action::Quit]);
        assert_eq!(ctrl(&mut state, 'q'), vec![Action::Quit]);
    }

    #[test]
    fn test_list_edit_and_delete_with_keys() {
        let mut state = empty_state();
        add_via_keys(&mut state, "dog", "犬");
        add_via_keys(&mut state, "cat", "ねこ");

        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, FocusPanel::WordList);
        press(&mut state, KeyCode::Home);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('e'));
        assert!(matches!(state.dialog, Some(Dialog::Edit { .. })));

        press(&mut state, KeyCode::Tab);
        ctrl(&mut state, 'u');
        type_str(&mut state, "猫");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(actions, vec![Action::PersistWords]);
        assert_eq!(state.store.entries()[1].translation, "猫");

        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.store.len(), 2);

        press(&mut state, KeyCode::Delete);
        let actions = press(&mut state, KeyCode::Char('y'));
        assert_eq!(actions, vec![Action::PersistWords]);
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.entries()[0].text, "dog");
    }

    #[test]
    fn test_dialog_swallows_quiz_toggle() {
        let mut state = empty_state();
        add_via_keys(&mut state, "dog", "犬");
        let id = state.store.entries()[0].id;
        state.request_delete(id);
        press(&mut state, KeyCode::F(2));
        assert!(!state.quiz_mode());
        press(&mut state, KeyCode::Esc);
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_quiz_with_keys() {
        let mut state = empty_state();
        add_via_keys(&mut state, "dog", "犬");
        add_via_keys(&mut state, "cat", "猫");

        press(&mut state, KeyCode::F(2));
        assert_eq!(state.quiz.phase(), QuizPhase::Active);
        assert_eq!(state.quiz.prompt(), Some("dog"));

        type_str(&mut state, " 犬 ");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.quiz.score().correct, 1);

        press(&mut state, KeyCode::F(3));
        assert_eq!(state.quiz.direction(), Direction::Reverse);
        assert_eq!(state.quiz.prompt(), Some("猫"));
        type_str(&mut state, "CAT");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.quiz.phase(), QuizPhase::Finished);
        assert_eq!(state.quiz.score().to_string(), "2/2 (100.00%)");

        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.quiz.phase(), QuizPhase::Active);
        press(&mut state, KeyCode::Esc);
        assert!(!state.quiz_mode());
    }

    #[test]
    fn test_tick_expires_notification() {
        let mut state = empty_state();
        state.config.ui.notification_secs = 0;
        state.notify(NotificationKind::Info, "hi");
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.notification.is_none());
    }
}
