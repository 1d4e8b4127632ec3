//! Application state container.
//!
//! The [`Store`] owns one instance of each module and is the only way to
//! change them: callers send a typed [`StoreAction`] through
//! [`Store::dispatch`], which commits the module's mutations in order.
//! Modules never reach into each other; a menu entry that affects the panel
//! does so by dispatching panel actions.

pub mod menu;
pub mod panel;

use menu::{MenuCommand, MenuStore, SideEffect};
use panel::{ClearPolicy, PanelStore};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    ToggleMenu,
    TogglePanel,
    ClosePanel,
    SetPanelContent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub close_delay: Duration,
    pub clear_policy: ClearPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            close_delay: PanelStore::DEFAULT_CLOSE_DELAY,
            clear_policy: ClearPolicy::default(),
        }
    }
}

#[derive(Debug)]
pub struct Store {
    menu: MenuStore,
    panel: PanelStore,
}

impl Store {
    pub fn init(config: &StoreConfig) -> Self {
        tracing::info!(
            close_delay_ms = config.close_delay.as_millis() as u64,
            clear_policy = ?config.clear_policy,
            "store initialized"
        );
        Self {
            menu: MenuStore::default(),
            panel: PanelStore::new(config.close_delay, config.clear_policy),
        }
    }

    pub fn menu(&self) -> &MenuStore {
        &self.menu
    }

    pub fn panel(&self) -> &PanelStore {
        &self.panel
    }

    pub fn dispatch(&mut self, action: StoreAction, now: Instant) {
        tracing::debug!(?action, "dispatch");
        match action {
            StoreAction::ToggleMenu => self.menu.toggle_menu(),
            StoreAction::TogglePanel => self.panel.toggle(),
            StoreAction::ClosePanel => {
                self.panel.close(now);
            }
            StoreAction::SetPanelContent(content) => self.panel.set_content(content),
        }
    }

    /// Run a menu command. Dispatches are committed here; a side effect is
    /// returned for the caller to run outside the store.
    pub fn run_command(&mut self, command: &MenuCommand, now: Instant) -> Option<SideEffect> {
        match command {
            MenuCommand::NoOp => None,
            MenuCommand::Dispatch(steps) => {
                for step in steps {
                    self.dispatch(step.clone(), now);
                }
                None
            }
            MenuCommand::SideEffect(effect) => Some(*effect),
        }
    }

    /// Activate the catalog entry at `index`. Out of range does nothing.
    pub fn activate_menu_action(&mut self, index: usize, now: Instant) -> Option<SideEffect> {
        let command = self.menu.actions().get(index)?.on_click.clone();
        self.run_command(&command, now)
    }

    /// Fire deferred mutations that are due. Returns true if state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.panel.fire_due(now) > 0
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.panel.next_deadline()
    }

    /// Tear the store down. Pending deferred work is dropped, not run.
    pub fn dispose(mut self) {
        let dropped = self.panel.cancel_pending();
        tracing::info!(dropped, "store disposed");
    }
}
