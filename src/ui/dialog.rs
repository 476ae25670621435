use crate::app::state::*;
use crate::ui::input_box;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    match &state.dialog {
        Some(Dialog::Edit {
            word,
            translation,
            field,
            ..
        }) => {
            let area = centered(frame.area(), 60, 10);
            let inner = popup_frame(frame, area, " Edit word ");
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(inner);
            input_box::render(frame, rows[0], "Word", "Word", word, *field == EditField::Word);
            input_box::render(
                frame,
                rows[1],
                "Meaning",
                "Meaning",
                translation,
                *field == EditField::Translation,
            );
            frame.render_widget(
                Paragraph::new(help_line(&[("Enter", "OK"), ("Esc", "Cancel"), ("Tab", "Switch field")])),
                rows[2],
            );
        }
        Some(Dialog::ConfirmDelete { id }) => {
            let area = centered(frame.area(), 50, 7);
            let inner = popup_frame(frame, area, " Delete word ");
            let word = state
                .store
                .get(*id)
                .map(|e| e.text.as_str())
                .unwrap_or("");
            let lines = vec![
                Line::from(vec![
                    Span::styled("Really delete ", Theme::input_text()),
                    Span::styled(word, Theme::word_text()),
                    Span::styled("?", Theme::input_text()),
                ]),
                Line::from(""),
                help_line(&[("Enter/y", "OK"), ("Esc/n", "Cancel")]),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }
        None => {}
    }
}

fn popup_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn help_line(keys: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, what) in keys {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(
            format!(" {} ", what),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }
    Line::from(spans)
}
