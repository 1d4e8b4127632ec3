use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let menu_icon = if state.store.menu().is_visible() {
        Theme::icon("close")
    } else {
        Theme::icon("menu")
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", menu_icon),
            Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            state.config.ui.title.clone(),
            Theme::header().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::header()), area);
}
