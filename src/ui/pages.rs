//! Views selected by the router.

use crate::app::state::AppState;
use crate::router::table::ViewKind;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Render the matched view chain. The outer layout draws its frame and
/// hands its inner area to the next view.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut area = area;
    let matched = &state.router.current().matched;
    for view in matched {
        area = render_view(frame, area, *view, state);
    }
    if matched.is_empty() {
        render_not_found(frame, area, state);
    }
}

fn render_view(frame: &mut Frame, area: Rect, view: ViewKind, state: &AppState) -> Rect {
    match view {
        ViewKind::DefaultLayout => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        }
        ViewKind::IndexPage => {
            render_index(frame, area, state);
            area
        }
        ViewKind::NotFound => {
            render_not_found(frame, area, state);
            area
        }
    }
}

fn render_index(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(Span::styled(state.config.ui.title.clone(), Theme::title())),
        Line::from(""),
        Line::from(Span::styled("m  toggle menu      p  toggle panel", Theme::muted())),
        Line::from(Span::styled("g  go to a path     b/f  back/forward", Theme::muted())),
        Line::from(Span::styled("Esc  close panel    q  quit", Theme::muted())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_not_found(frame: &mut Frame, area: Rect, state: &AppState) {
    let route = state.router.current();
    let lines = vec![
        Line::from(Span::styled("404", Theme::error_title())),
        Line::from(""),
        Line::from(format!("Page not found: {}", route.path)),
        Line::from(""),
        Line::from(Span::styled("Press h to go home", Theme::muted())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
