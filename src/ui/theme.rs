use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 196, 182);
    pub const BG_SURFACE: Color = Color::Rgb(30, 32, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 43, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 90);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 136, 156);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Color::White).bg(Self::BG_ELEVATED)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn menu_selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn error_title() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Map a menu action's color name to a terminal color. Unknown names and
    /// `"transparent"` use the terminal default.
    pub fn named_color(name: &str) -> Color {
        match name {
            "primary" => Self::ACCENT_TEAL,
            "secondary" => Color::Magenta,
            "positive" => Color::Green,
            "negative" => Color::Red,
            "warning" => Color::Yellow,
            "dark" => Self::BG_SURFACE,
            _ => Color::Reset,
        }
    }

    /// Glyph for an icon identifier.
    pub fn icon(name: &str) -> &'static str {
        match name {
            "settings" => "⚙",
            "help" => "?",
            "menu" => "☰",
            "close" => "✕",
            _ => "•",
        }
    }

    /// Glossy buttons get a bold face; flat ones stay plain.
    pub fn menu_item(color: &str, glossy: bool) -> Style {
        let style = Style::default().fg(Color::White).bg(Self::named_color(color));
        if glossy {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
