use crate::app::state::*;
use crate::ui::dialog::help_line;
use crate::ui::theme::Theme;
use crate::vocab::QuizPhase;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_SURFACE),
    )];

    // A live notification replaces the key help
    if let Some(note) = &state.notification {
        let style = match note.kind {
            NotificationKind::Success => Theme::success(),
            NotificationKind::Error => Theme::error(),
            NotificationKind::Info => Theme::info(),
        };
        parts.push(Span::styled(format!(" {} ", note.text), style.bg(Theme::BG_ELEVATED)));
    } else {
        parts.extend(help_line(key_help(state)).spans);
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

fn key_help(state: &AppState) -> &'static [(&'static str, &'static str)] {
    if state.dialog.is_some() {
        return &[];
    }
    match state.quiz.phase() {
        QuizPhase::Active => &[
            ("Enter", "Answer"),
            ("F3", "Swap direction"),
            ("Esc", "End quiz"),
            ("^Q", "Quit"),
        ],
        QuizPhase::Finished => &[("Enter", "Play again"), ("Esc", "End quiz"), ("^Q", "Quit")],
        QuizPhase::Idle => match state.focus {
            FocusPanel::WordList => &[
                ("↑↓", "Select"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("Tab", "Focus"),
                ("F2", "Quiz"),
                ("^Q", "Quit"),
            ],
            _ => &[
                ("Enter", "Add"),
                ("Tab", "Focus"),
                ("F2", "Quiz"),
                ("^Q", "Quit"),
            ],
        },
    }
}
