use crate::app::input::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Draw a bordered single-line text field. The terminal cursor is placed in
/// the field when it has focus.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    input: &InputState,
    focused: bool,
) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = if input.text.is_empty() && !focused {
        Paragraph::new(Span::styled(placeholder, Theme::placeholder()))
    } else {
        Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text()))
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + input.cursor_width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
