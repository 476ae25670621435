mod dialog;
mod input_box;
mod layout;
mod quiz_panel;
mod status_bar;
mod theme;
mod title_bar;
mod word_list;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    title_bar::render(frame, app_layout.title_bar, state);
    if state.quiz_mode() {
        quiz_panel::render(frame, app_layout.body, state);
    } else {
        render_vocab(frame, app_layout.body, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Popups draw last so they sit on top
    dialog::render(frame, state);
}

fn render_vocab(frame: &mut Frame, area: Rect, state: &AppState) {
    let vocab = layout::compute_vocab_layout(area);
    let form_active = state.dialog.is_none();

    input_box::render(
        frame,
        vocab.word_field,
        "New word",
        "New word",
        &state.word_input,
        form_active && state.focus == FocusPanel::WordField,
    );
    input_box::render(
        frame,
        vocab.translation_field,
        "Meaning",
        "Meaning",
        &state.translation_input,
        form_active && state.focus == FocusPanel::TranslationField,
    );
    word_list::render(frame, vocab.word_list, state);
}
