//! Slide-out panel module: visibility plus the text shown inside it.
//!
//! Closing the panel hides it at once and clears its content only after a
//! delay, so the exit transition can still draw the old text. The delayed
//! clear is a [`PendingClear`] deadline that [`PanelStore::fire_due`] runs
//! from the event loop tick.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What happens to a pending clear when the panel is touched again before it
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClearPolicy {
    /// Every scheduled clear fires at its deadline, even if newer content was
    /// set in the meantime.
    #[default]
    Unconditional,
    /// `set_content`, `toggle` and `close` drop any pending clear first.
    CancelOnSupersede,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
    pub content: Option<String>,
}

/// A deferred content clear scheduled by `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub ticket: u64,
    pub due: Instant,
}

#[derive(Debug)]
pub struct PanelStore {
    state: PanelState,
    close_delay: Duration,
    policy: ClearPolicy,
    pending: Vec<PendingClear>,
    next_ticket: u64,
}

impl PanelStore {
    pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

    pub fn new(close_delay: Duration, policy: ClearPolicy) -> Self {
        Self {
            state: PanelState::default(),
            close_delay,
            policy,
            pending: Vec::new(),
            next_ticket: 0,
        }
    }

    // Getters

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn content(&self) -> Option<&str> {
        self.state.content.as_deref()
    }

    pub fn policy(&self) -> ClearPolicy {
        self.policy
    }

    pub fn pending(&self) -> &[PendingClear] {
        &self.pending
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    // Actions

    pub fn toggle(&mut self) {
        self.supersede_pending();
        self.toggle_panel();
    }

    /// Hide the panel now and schedule the content clear. Returns the ticket
    /// of the scheduled clear.
    pub fn close(&mut self, now: Instant) -> u64 {
        self.supersede_pending();
        self.close_panel();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let due = now + self.close_delay;
        self.pending.push(PendingClear { ticket, due });
        tracing::debug!(ticket, delay_ms = self.close_delay.as_millis() as u64, "panel clear scheduled");
        ticket
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.supersede_pending();
        self.set_content_mutation(content.into());
    }

    /// Run every pending clear whose deadline is at or before `now`.
    /// Returns how many fired.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = Vec::new();
        self.pending.retain(|p| {
            if now >= p.due {
                fired.push(p.ticket);
                false
            } else {
                true
            }
        });
        for ticket in &fired {
            tracing::debug!(ticket, "panel clear fired");
            self.clear_content();
        }
        fired.len()
    }

    /// Drop all pending clears without running them.
    pub fn cancel_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        if dropped > 0 {
            tracing::debug!(dropped, "panel clears cancelled");
        }
        self.pending.clear();
        dropped
    }

    fn supersede_pending(&mut self) {
        if self.policy == ClearPolicy::CancelOnSupersede {
            self.cancel_pending();
        }
    }

    // Mutations

    fn toggle_panel(&mut self) {
        self.state.visible = !self.state.visible;
    }

    fn close_panel(&mut self) {
        self.state.visible = false;
    }

    fn set_content_mutation(&mut self, content: String) {
        self.state.content = if self.state.content.as_deref() == Some(content.as_str()) {
            None
        } else {
            Some(content)
        };
    }

    fn clear_content(&mut self) {
        self.state.content = None;
    }
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CLOSE_DELAY, ClearPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_state() {
        let panel = PanelStore::default();
        assert!(!panel.is_visible());
        assert_eq!(panel.content(), None);
        assert!(panel.pending().is_empty());
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut panel = PanelStore::default();
        panel.toggle();
        assert!(panel.is_visible());
        panel.toggle();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_set_content_twice_clears() {
        let mut panel = PanelStore::default();
        panel.set_content("X");
        assert_eq!(panel.content(), Some("X"));
        panel.set_content("X");
        assert_eq!(panel.content(), None);
    }

    #[test]
    fn test_set_content_replaces_different_value() {
        let mut panel = PanelStore::default();
        panel.set_content("X");
        panel.set_content("Y");
        assert_eq!(panel.content(), Some("Y"));
    }

    #[test]
    fn test_close_hides_now_and_clears_after_delay() {
        let mut panel = PanelStore::default();
        let t0 = Instant::now();
        panel.set_content("A");
        panel.toggle();
        panel.close(t0);

        assert!(!panel.is_visible());
        assert_eq!(panel.content(), Some("A"));
        assert_eq!(panel.next_deadline(), Some(t0 + ms(300)));

        assert_eq!(panel.fire_due(t0 + ms(299)), 0);
        assert_eq!(panel.content(), Some("A"));

        assert_eq!(panel.fire_due(t0 + ms(300)), 1);
        assert_eq!(panel.content(), None);
        assert_eq!(panel.next_deadline(), None);
    }

    #[test]
    fn test_unconditional_clear_overwrites_newer_content() {
        let mut panel = PanelStore::new(ms(300), ClearPolicy::Unconditional);
        let t0 = Instant::now();
        panel.set_content("A");
        panel.close(t0);
        panel.set_content("B");
        assert_eq!(panel.content(), Some("B"));

        panel.fire_due(t0 + ms(300));
        assert_eq!(panel.content(), None);
    }

    #[test]
    fn test_unconditional_keeps_every_scheduled_clear() {
        let mut panel = PanelStore::new(ms(300), ClearPolicy::Unconditional);
        let t0 = Instant::now();
        panel.close(t0);
        panel.close(t0 + ms(100));
        assert_eq!(panel.pending().len(), 2);

        panel.set_content("B");
        assert_eq!(panel.fire_due(t0 + ms(300)), 1);
        assert_eq!(panel.content(), None);

        panel.set_content("C");
        assert_eq!(panel.fire_due(t0 + ms(400)), 1);
        assert_eq!(panel.content(), None);
    }

    #[test]
    fn test_cancel_on_supersede_keeps_newer_content() {
        let mut panel = PanelStore::new(ms(300), ClearPolicy::CancelOnSupersede);
        let t0 = Instant::now();
        panel.set_content("A");
        panel.close(t0);
        panel.set_content("B");
        assert!(panel.pending().is_empty());

        assert_eq!(panel.fire_due(t0 + ms(1000)), 0);
        assert_eq!(panel.content(), Some("B"));
    }

    #[test]
    fn test_cancel_on_supersede_reopen_keeps_content() {
        let mut panel = PanelStore::new(ms(300), ClearPolicy::CancelOnSupersede);
        let t0 = Instant::now();
        panel.set_content("A");
        panel.toggle();
        panel.close(t0);
        panel.toggle();

        panel.fire_due(t0 + ms(300));
        assert!(panel.is_visible());
        assert_eq!(panel.content(), Some("A"));
    }

    #[test]
    fn test_cancel_on_supersede_close_reschedules() {
        let mut panel = PanelStore::new(ms(300), ClearPolicy::CancelOnSupersede);
        let t0 = Instant::now();
        panel.set_content("A");
        let first = panel.close(t0);
        let second = panel.close(t0 + ms(200));
        assert_ne!(first, second);
        assert_eq!(panel.pending().len(), 1);

        assert_eq!(panel.fire_due(t0 + ms(300)), 0);
        assert_eq!(panel.content(), Some("A"));
        assert_eq!(panel.fire_due(t0 + ms(500)), 1);
        assert_eq!(panel.content(), None);
    }

    #[test]
    fn test_cancel_pending() {
        let mut panel = PanelStore::default();
        let t0 = Instant::now();
        panel.set_content("A");
        panel.close(t0);
        assert_eq!(panel.cancel_pending(), 1);
        assert_eq!(panel.fire_due(t0 + ms(300)), 0);
        assert_eq!(panel.content(), Some("A"));
    }
}
