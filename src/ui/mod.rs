mod header;
mod layout;
mod pages;
mod panel;
mod prompt;
mod side_menu;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use layout::LayoutRequest;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let ui = &state.config.ui;
    let request = LayoutRequest {
        menu_width: state.store.menu().is_visible().then_some(ui.menu_width),
        panel_width: state.store.panel().is_visible().then_some(ui.panel_width),
        prompt: state.prompt.active,
    };
    let app_layout = layout::compute_layout(area, &request);

    header::render(frame, app_layout.header, state);
    pages::render(frame, app_layout.page, state);
    if let Some(menu_area) = app_layout.side_menu {
        side_menu::render(frame, menu_area, state);
    }
    if let Some(panel_area) = app_layout.panel {
        panel::render(frame, panel_area, state);
    }
    if let Some(prompt_area) = app_layout.prompt {
        prompt::render(frame, prompt_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
