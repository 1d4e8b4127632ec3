use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub side_menu: Option<Rect>,
    pub page: Rect,
    pub panel: Option<Rect>,
    pub prompt: Option<Rect>,
    pub status_bar: Rect,
}

pub struct LayoutRequest {
    pub menu_width: Option<u16>,
    pub panel_width: Option<u16>,
    pub prompt: bool,
}

pub fn compute_layout(area: Rect, request: &LayoutRequest) -> AppLayout {
    // Main vertical split: header | content | prompt | status bar
    let prompt_height = if request.prompt { 3 } else { 0 };
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Min(3),                // Content
            Constraint::Length(prompt_height), // Go-to prompt
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let prompt = request.prompt.then_some(main_chunks[2]);
    let status_bar = main_chunks[3];

    // Horizontal: side menu | page | slide-out panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(request.menu_width.unwrap_or(0)),
            Constraint::Min(10),
            Constraint::Length(request.panel_width.unwrap_or(0)),
        ])
        .split(content);

    AppLayout {
        header,
        side_menu: request.menu_width.map(|_| h_chunks[0]),
        page: h_chunks[1],
        panel: request.panel_width.map(|_| h_chunks[2]),
        prompt,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_overlays() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = compute_layout(
            area,
            &LayoutRequest {
                menu_width: None,
                panel_width: None,
                prompt: false,
            },
        );
        assert!(layout.side_menu.is_none());
        assert!(layout.panel.is_none());
        assert!(layout.prompt.is_none());
        assert_eq!(layout.page.width, 80);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_layout_with_menu_and_panel() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = compute_layout(
            area,
            &LayoutRequest {
                menu_width: Some(24),
                panel_width: Some(36),
                prompt: true,
            },
        );
        assert_eq!(layout.side_menu.map(|r| r.width), Some(24));
        assert_eq!(layout.panel.map(|r| r.width), Some(36));
        assert_eq!(layout.page.width, 40);
        assert_eq!(layout.prompt.map(|r| r.height), Some(3));
    }
}
