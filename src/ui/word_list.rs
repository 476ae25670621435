use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::WordList && !state.quiz_mode();
    let block = Block::default()
        .title(format!(" Words ({}) ", state.store.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    if state.store.is_empty() {
        let items = vec![ListItem::new(Span::styled(
            " No words yet. Type a word and its meaning above, then press Enter.",
            Theme::placeholder(),
        ))];
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = state
        .store
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.text.as_str(), Theme::word_text()),
                Span::styled(" : ", Style::default().fg(Theme::BORDER_DIM)),
                Span::styled(entry.translation.as_str(), Theme::translation_text()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selected));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected_row())
        .highlight_symbol("❯ ");
    frame.render_stateful_widget(list, area, &mut list_state);
}
