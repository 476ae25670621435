use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub struct VocabLayout {
    pub word_field: Rect,
    pub translation_field: Rect,
    pub word_list: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        title_bar: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

pub fn compute_vocab_layout(body: Rect) -> VocabLayout {
    // Form row | word list
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    VocabLayout {
        word_field: fields[0],
        translation_field: fields[1],
        word_list: rows[1],
    }
}

/// A rectangle of `width` x `height` centered in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}
