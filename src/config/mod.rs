pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;

pub use model::{AppConfig, LoggingConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("ui.{0} must be greater than zero")]
    ZeroWidth(&'static str),
    #[error("router.initial_path must start with '/', got {0:?}")]
    RelativeInitialPath(String),
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sidedeck")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = parse_config(&contents)?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.ui.tick_rate_ms == 0 {
        return Err(ConfigError::ZeroTickRate);
    }
    if config.ui.menu_width == 0 {
        return Err(ConfigError::ZeroWidth("menu_width"));
    }
    if config.ui.panel_width == 0 {
        return Err(ConfigError::ZeroWidth("panel_width"));
    }
    let initial = config.router.initial_path.trim_start_matches('#');
    if !initial.starts_with('/') {
        return Err(ConfigError::RelativeInitialPath(
            config.router.initial_path.clone(),
        ));
    }
    Ok(())
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::panel::ClearPolicy;
    use crate::store::StoreConfig;
    use std::time::Duration;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.panel.close_delay_ms, 300);
        assert_eq!(config.panel.clear_policy, ClearPolicy::Unconditional);
        assert_eq!(config.router.initial_path, "/");
        assert_eq!(config.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [panel]
            clear_policy = "cancel-on-supersede"

            [ui]
            title = "Deck"
            "#,
        )
        .unwrap();
        assert_eq!(config.panel.clear_policy, ClearPolicy::CancelOnSupersede);
        assert_eq!(config.panel.close_delay_ms, 300);
        assert_eq!(config.ui.title, "Deck");
        assert_eq!(config.ui.menu_width, 24);
    }

    #[test]
    fn test_store_config_from_panel() {
        let mut config = AppConfig::default();
        config.panel.close_delay_ms = 120;
        let store_config = StoreConfig::from(&config.panel);
        assert_eq!(store_config.close_delay, Duration::from_millis(120));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert_eq!(validate(&config), Err(ConfigError::ZeroTickRate));

        let mut config = AppConfig::default();
        config.ui.panel_width = 0;
        assert_eq!(validate(&config), Err(ConfigError::ZeroWidth("panel_width")));

        let mut config = AppConfig::default();
        config.router.initial_path = "home".into();
        assert_eq!(
            validate(&config),
            Err(ConfigError::RelativeInitialPath("home".into()))
        );

        let mut config = AppConfig::default();
        config.router.initial_path = "#/home".into();
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(parse_config("[ui\ntitle = 1").is_err());
        assert!(parse_config("[panel]\nclear_policy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
