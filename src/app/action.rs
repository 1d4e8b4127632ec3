use crate::store::menu::SideEffect;

/// Work the event loop performs outside of state handling.
#[derive(Debug)]
pub enum Action {
    /// Run a menu entry's out-of-band effect.
    RunSideEffect(SideEffect),
    Quit,
}
