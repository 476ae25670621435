use crate::app::state::AppState;
use crate::ui::input_box;
use crate::ui::theme::Theme;
use crate::vocab::QuizPhase;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Quiz ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state.quiz.phase() {
        QuizPhase::Active => render_active(frame, inner, state),
        QuizPhase::Finished => render_results(frame, inner, state),
        QuizPhase::Idle => {}
    }
}

fn render_active(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1),
            Constraint::Min(3),    // Prompt
            Constraint::Length(1), // Previous answer feedback
            Constraint::Length(3), // Answer field
        ])
        .split(area);

    let (answered, total) = state.quiz.progress();
    let ratio = if total == 0 {
        0.0
    } else {
        answered as f64 / total as f64
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED))
        .ratio(ratio)
        .label(format!(
            "{}/{} answered · {} left · score {}",
            answered,
            total,
            state.quiz.remaining(),
            state.quiz.score()
        ));
    frame.render_widget(gauge, chunks[0]);

    let direction = state.quiz.direction();
    let prompt = state.quiz.prompt().unwrap_or("");
    let prompt_lines = vec![
        Line::from(Span::styled(
            direction.label(),
            Style::default().fg(Theme::TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(prompt, Theme::prompt())),
    ];
    frame.render_widget(
        Paragraph::new(prompt_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[2],
    );

    if let Some(outcome) = &state.last_outcome {
        let line = if outcome.correct {
            Line::from(Span::styled("✔ Correct", Theme::success()))
        } else {
            Line::from(vec![
                Span::styled("✘ Incorrect, answer: ", Theme::error()),
                Span::styled(outcome.expected.as_str(), Theme::word_text()),
            ])
        };
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            chunks[3],
        );
    }

    let answer_title = match direction {
        crate::vocab::Direction::Forward => "Meaning",
        crate::vocab::Direction::Reverse => "Word",
    };
    input_box::render(
        frame,
        chunks[4],
        answer_title,
        "Type your answer",
        &state.answer_input,
        state.dialog.is_none(),
    );
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let score = state.quiz.score();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Quiz complete!", Theme::prompt())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct: ", Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled(
                format!("{} / {}", score.correct, score.total),
                Theme::word_text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Accuracy: ", Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled(score.percentage_label(), Theme::success()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" Play again  ", Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled("Esc", Theme::key_hint()),
            Span::styled(" Back to words", Style::default().fg(Theme::TEXT_SECONDARY)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
