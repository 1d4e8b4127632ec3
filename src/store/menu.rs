//! Side menu module: visibility and the static catalog of menu actions.

use super::StoreAction;

/// Spacing around a menu button, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    None,
    Xs,
    Sm,
    Md,
}

impl Padding {
    pub fn cells(self) -> usize {
        match self {
            Padding::None => 0,
            Padding::Xs => 1,
            Padding::Sm => 2,
            Padding::Md => 3,
        }
    }
}

/// An out-of-band effect a menu entry asks its caller to run. It never
/// touches store state.
#[derive(Debug, Clone, Copy)]
pub struct SideEffect {
    pub name: &'static str,
    run: fn(),
}

impl SideEffect {
    pub const fn new(name: &'static str, run: fn()) -> Self {
        Self { name, run }
    }

    pub fn run(&self) {
        (self.run)()
    }
}

/// What selecting a menu entry does.
#[derive(Debug, Clone)]
pub enum MenuCommand {
    NoOp,
    /// Store actions run in order; each sees the commits of the previous one.
    Dispatch(Vec<StoreAction>),
    SideEffect(SideEffect),
}

#[derive(Debug, Clone)]
pub struct MenuAction {
    pub label: String,
    pub icon: String,
    pub color: String,
    pub padding: Padding,
    pub external_label: bool,
    pub glossy: bool,
    pub on_click: MenuCommand,
}

fn help_requested() {
    tracing::info!(target: "sidedeck::help", "help requested from side menu");
}

/// The built-in catalog: "Settings" opens the panel on its settings page,
/// "Help" only logs.
pub fn default_actions() -> Vec<MenuAction> {
    vec![
        MenuAction {
            label: "Settings".into(),
            icon: "settings".into(),
            color: "transparent".into(),
            padding: Padding::Xs,
            external_label: true,
            glossy: true,
            on_click: MenuCommand::Dispatch(vec![
                StoreAction::SetPanelContent("Settings".into()),
                StoreAction::TogglePanel,
            ]),
        },
        MenuAction {
            label: "Help".into(),
            icon: "help".into(),
            color: "transparent".into(),
            padding: Padding::Xs,
            external_label: true,
            glossy: true,
            on_click: MenuCommand::SideEffect(SideEffect::new("help", help_requested)),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct MenuState {
    pub visible: bool,
    pub actions: Vec<MenuAction>,
}

#[derive(Debug)]
pub struct MenuStore {
    state: MenuState,
}

impl MenuStore {
    pub fn new(actions: Vec<MenuAction>) -> Self {
        Self {
            state: MenuState {
                visible: false,
                actions,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn actions(&self) -> &[MenuAction] {
        &self.state.actions
    }

    pub fn toggle_menu(&mut self) {
        self.toggle_menu_mutation();
    }

    fn toggle_menu_mutation(&mut self) {
        self.state.visible = !self.state.visible;
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(default_actions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let menu = MenuStore::default();
        assert!(!menu.is_visible());
        assert_eq!(menu.actions().len(), 2);
    }

    #[test]
    fn test_toggle_menu_is_involution() {
        let mut menu = MenuStore::default();
        menu.toggle_menu();
        assert!(menu.is_visible());
        menu.toggle_menu();
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_default_catalog() {
        let actions = default_actions();
        let labels: Vec<_> = actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["Settings", "Help"]);

        match &actions[0].on_click {
            MenuCommand::Dispatch(steps) => assert_eq!(
                steps,
                &vec![
                    StoreAction::SetPanelContent("Settings".into()),
                    StoreAction::TogglePanel,
                ]
            ),
            other => panic!("unexpected settings command: {:?}", other),
        }
        assert!(matches!(actions[1].on_click, MenuCommand::SideEffect(_)));
    }

    #[test]
    fn test_padding_cells() {
        assert_eq!(Padding::None.cells(), 0);
        assert_eq!(Padding::Xs.cells(), 1);
        assert_eq!(Padding::Md.cells(), 3);
    }
}
