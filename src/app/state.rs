use crate::config::AppConfig;
use crate::router::Router;
use crate::store::{Store, StoreConfig};
use std::time::Instant;

/// Single-line editor for the go-to prompt, with a history of submitted
/// paths.
#[derive(Debug, Default)]
pub struct InputState {
    pub active: bool,
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.active = true;
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    /// Close the prompt and return what was typed. Non-empty entries are
    /// remembered for `history_up`.
    pub fn submit(&mut self) -> String {
        let text = self.text.trim().to_string();
        self.cancel();
        if !text.is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }
}

/// The mounted application: store, router and UI-local state.
pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub router: Router,
    pub prompt: InputState,
    pub menu_cursor: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::init(&StoreConfig::from(&config.panel));
        let router = Router::with_default_routes(&config.router.initial_path);
        Self {
            config,
            store,
            router,
            prompt: InputState::new(),
            menu_cursor: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn move_menu_cursor_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
        self.dirty = true;
    }

    pub fn move_menu_cursor_down(&mut self) {
        let len = self.store.menu().actions().len();
        if self.menu_cursor + 1 < len {
            self.menu_cursor += 1;
        }
        self.dirty = true;
    }

    pub fn navigate(&mut self, location: &str) {
        if self.router.push(location) {
            self.status_message = None;
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let route = self.router.current();
        let menu = if self.store.menu().is_visible() { "open" } else { "closed" };
        let panel = if self.store.panel().is_visible() { "open" } else { "closed" };
        let history = self.router.history();
        let nav = match (history.can_go_back(), history.can_go_forward()) {
            (true, true) => " | b/f",
            (true, false) => " | b",
            (false, true) => " | f",
            (false, false) => "",
        };
        format!("#{} | menu: {} | panel: {}{}", route.full_path, menu, panel, nav)
    }

    /// Run due deferred store work. Redraws while a clear is pending so the
    /// status bar countdown stays current.
    pub fn tick(&mut self, now: Instant) {
        if self.store.tick(now) || self.store.next_deadline().is_some() {
            self.dirty = true;
        }
    }

    /// Unmount: tear down the store.
    pub fn dispose(self) {
        self.store.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_editing() {
        let mut input = InputState::new();
        input.open();
        for c in "/abç".chars() {
            input.insert_char(c);
        }
        input.delete_back();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text, "/axb");
        input.move_right();
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_prompt_submit_and_history() {
        let mut input = InputState::new();
        input.open();
        input.text = " /docs ".into();
        assert_eq!(input.submit(), "/docs");
        assert!(!input.active);

        input.open();
        input.text = "/about".into();
        input.submit();

        input.open();
        input.history_up();
        assert_eq!(input.text, "/about");
        input.history_up();
        assert_eq!(input.text, "/docs");
        input.history_down();
        assert_eq!(input.text, "/about");
        input.history_down();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_new_state_mounts_initial_route() {
        let state = AppState::new(AppConfig::default());
        assert!(!state.router.current().is_not_found());
        assert_eq!(state.status_line(), "#/ | menu: closed | panel: closed");
    }

    #[test]
    fn test_status_line_shows_history() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate("/docs?x=1");
        assert_eq!(state.status_line(), "#/docs?x=1 | menu: closed | panel: closed | b");
        state.router.back();
        assert_eq!(state.status_line(), "#/ | menu: closed | panel: closed | f");
    }

    #[test]
    fn test_menu_cursor_is_clamped() {
        let mut state = AppState::new(AppConfig::default());
        state.move_menu_cursor_up();
        assert_eq!(state.menu_cursor, 0);
        for _ in 0..5 {
            state.move_menu_cursor_down();
        }
        assert_eq!(state.menu_cursor, 1);
    }
}
