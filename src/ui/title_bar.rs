use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let mode = if state.quiz_mode() {
        Span::styled(
            format!("Quiz · {}", state.quiz.direction().label()),
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Vocabulary",
            Style::default()
                .fg(Theme::TEXT_SECONDARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        )
    };

    let line = Line::from(vec![
        Span::styled(
            " ◆ ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Flashcards",
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ ",
            Style::default()
                .fg(Theme::BORDER_DIM)
                .bg(Theme::BG_ELEVATED),
        ),
        mode,
    ]);

    frame.render_widget(Paragraph::new(line).style(bg), area);
}
