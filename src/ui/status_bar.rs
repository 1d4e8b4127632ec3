use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::fmt::Write;
use std::time::Instant;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    if let Some(due) = state.store.next_deadline() {
        let left = due.saturating_duration_since(Instant::now());
        parts.push(Span::styled(
            format!(" | clearing in {} ms ", left.as_millis()),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    // A bad format string renders no clock rather than panicking.
    let mut clock = String::new();
    if write!(clock, "{}", chrono::Local::now().format(&state.config.ui.clock_format)).is_err() {
        clock.clear();
    }
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", clock),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
