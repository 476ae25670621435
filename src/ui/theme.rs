use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 52);
    pub const BORDER_DIM: Color = Color::Rgb(75, 80, 92);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 156, 168);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 122);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(230, 100, 100);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn word_text() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn translation_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::BG_SURFACE)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}
