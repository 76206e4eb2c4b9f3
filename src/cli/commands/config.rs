//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::schema::StorageBackend;
use crate::config::{Config, ConfigManager};
use crate::error::{CartError, CartResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> CartResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> CartResult<()> {
    let toml = toml::to_string_pretty(config)?;
    println!("{}", toml);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> CartResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok(
        &ctx,
        &format!("Configuration initialized at {}", path.display()),
    );

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> CartResult<()> {
    let mut config = config.clone();
    apply_value(&mut config, key, value)?;
    manager.save(&config).await?;

    let ctx = UiContext::detect();
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
    Ok(())
}

fn apply_value(config: &mut Config, key: &str, value: &str) -> CartResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["storage", "backend"] => {
            config.storage.backend = match value {
                "file" => StorageBackend::File,
                "memory" => StorageBackend::Memory,
                _ => {
                    return Err(CartError::User(format!(
                        "Invalid storage backend: {value} (expected file or memory)"
                    )))
                }
            }
        }
        ["storage", "data_dir"] => {
            config.storage.data_dir = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        ["storage", "key"] if !value.is_empty() => config.storage.key = value.to_string(),
        ["storage", "key"] => {
            return Err(CartError::User("storage.key cannot be empty".to_string()))
        }
        _ => return Err(CartError::User(format!("Unknown config key: {key}"))),
    }

    Ok(())
}

fn parse_bool(value: &str) -> CartResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CartError::User(format!("Invalid boolean value: {value}"))),
    }
}
