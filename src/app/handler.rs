use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::store::StoreAction;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, now),
        AppEvent::Tick => {
            state.tick(now);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key, now)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Go-to prompt captures all input while open
    if state.prompt.active {
        handle_prompt_key(state, key);
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('m') => {
            state.store.dispatch(StoreAction::ToggleMenu, now);
            vec![]
        }
        KeyCode::Char('p') => {
            state.store.dispatch(StoreAction::TogglePanel, now);
            vec![]
        }
        KeyCode::Esc => {
            if state.store.panel().is_visible() {
                state.store.dispatch(StoreAction::ClosePanel, now);
            } else if state.store.menu().is_visible() {
                state.store.dispatch(StoreAction::ToggleMenu, now);
            }
            vec![]
        }
        KeyCode::Char('g') | KeyCode::Char(':') => {
            state.prompt.open();
            vec![]
        }
        KeyCode::Char('b') => {
            state.router.back();
            vec![]
        }
        KeyCode::Char('f') => {
            state.router.forward();
            vec![]
        }
        KeyCode::Char('h') | KeyCode::Home => {
            state.navigate("/");
            vec![]
        }
        _ if state.store.menu().is_visible() => handle_menu_key(state, key, now),
        _ => vec![],
    }
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_menu_cursor_up();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_menu_cursor_down();
            vec![]
        }
        KeyCode::Enter => {
            let index = state.menu_cursor;
            match state.store.activate_menu_action(index, now) {
                Some(effect) => vec![Action::RunSideEffect(effect)],
                None => vec![],
            }
        }
        _ => vec![],
    }
}

fn handle_prompt_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.prompt.cancel(),
        KeyCode::Enter => {
            let path = state.prompt.submit();
            if !path.is_empty() {
                state.navigate(&path);
            }
        }
        KeyCode::Backspace => state.prompt.delete_back(),
        KeyCode::Left => state.prompt.move_left(),
        KeyCode::Right => state.prompt.move_right(),
        KeyCode::Up => state.prompt.history_up(),
        KeyCode::Down => state.prompt.history_down(),
        KeyCode::Char(c) => state.prompt.insert_char(c),
        _ => {}
    }
}
