use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let panel = state.store.panel();
    let title = match panel.content() {
        Some(content) => format!(" {} ", content),
        None => " Panel ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let body = match panel.content() {
        Some("Settings") => vec![
            Line::from(format!(
                "Close delay: {} ms",
                state.config.panel.close_delay_ms
            )),
            Line::from(format!("Clear policy: {:?}", panel.policy())),
            Line::from(format!("Tick rate: {} ms", state.config.ui.tick_rate_ms)),
        ],
        Some(content) => vec![Line::from(content.to_string())],
        None => vec![Line::from(Span::styled("Nothing to show", Theme::muted()))],
    };

    let paragraph = Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
