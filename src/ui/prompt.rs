use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Go to ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Prompt chevron + path text
    let line = Line::from(vec![
        Span::styled("# ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(state.prompt.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width == 0 {
        return;
    }
    let before_cursor = &state.prompt.text[..state.prompt.cursor];
    let cursor_x = inner.x + 2 + before_cursor.width() as u16;
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
}
