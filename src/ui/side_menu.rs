use crate::app::state::AppState;
use crate::store::menu::MenuAction;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn action_line(action: &MenuAction, selected: bool, width: usize) -> Line<'static> {
    let pad = " ".repeat(action.padding.cells());
    let button = format!("{}{}{}", pad, Theme::icon(&action.icon), pad);
    let button_style = if selected {
        Theme::menu_selected()
    } else {
        Theme::menu_item(&action.color, action.glossy)
    };

    let label_room = width.saturating_sub(button.width() + 1);
    let label = truncate_to_width(&action.label, label_room);
    if action.external_label {
        Line::from(vec![
            Span::styled(button, button_style),
            Span::raw(" "),
            Span::styled(label, if selected { Theme::border_focused() } else { Theme::muted() }),
        ])
    } else {
        Line::from(Span::styled(format!("{} {}", button, label), button_style))
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Menu ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());

    let width = block.inner(area).width as usize;
    let items: Vec<ListItem> = state
        .store
        .menu()
        .actions()
        .iter()
        .enumerate()
        .map(|(i, action)| ListItem::new(action_line(action, i == state.menu_cursor, width)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Settings", 10), "Settings");
        assert_eq!(truncate_to_width("Settings", 5), "Sett…");
        assert_eq!(truncate_to_width("設定設定", 5), "設定…");
        assert_eq!(truncate_to_width("Help", 0), "");
    }
}
