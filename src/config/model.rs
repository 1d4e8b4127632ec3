//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::store::panel::ClearPolicy;
use crate::store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_menu_width")]
    pub menu_width: u16,
    #[serde(default = "default_panel_width")]
    pub panel_width: u16,
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
            menu_width: default_menu_width(),
            panel_width: default_panel_width(),
            clock_format: default_clock_format(),
        }
    }
}

fn default_title() -> String {
    "Sidedeck".into()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_menu_width() -> u16 {
    24
}
fn default_panel_width() -> u16 {
    36
}
fn default_clock_format() -> String {
    "%H:%M".into()
}

/// Slide-out panel behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelConfig {
    /// Delay between closing the panel and clearing its content.
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
    /// `"unconditional"` or `"cancel-on-supersede"`.
    #[serde(default)]
    pub clear_policy: ClearPolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
            clear_policy: ClearPolicy::default(),
        }
    }
}

fn default_close_delay_ms() -> u64 {
    300
}

impl From<&PanelConfig> for StoreConfig {
    fn from(panel: &PanelConfig) -> Self {
        StoreConfig {
            close_delay: Duration::from_millis(panel.close_delay_ms),
            clear_policy: panel.clear_policy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            initial_path: default_initial_path(),
        }
    }
}

fn default_initial_path() -> String {
    "/".into()
}

/// Diagnostic log file settings. The terminal belongs to the UI, so logs go
/// to a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_level() -> String {
    "info".into()
}
fn default_log_dir() -> String {
    "~/.local/share/sidedeck/logs".into()
}
