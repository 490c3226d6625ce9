//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Settings for the config command.
///
/// Values are not validated, and an unreadable file falls back to the
/// defaults with a warning, so `config init --force` can always reset it.
pub fn config_settings(path: Option<&Path>) -> Settings {
    Settings::read_from(path).unwrap_or_else(|e| {
        Output::warning(&format!("Ignoring unreadable config: {}", e));
        Settings::default()
    })
}

/// Run the config command.
///
/// `config_path` is the file given with `--config`, if any.
pub fn run_config(
    action: &ConfigAction,
    settings: &Settings,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let path = config_path.unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }

        ConfigAction::Init { force } => {
            if path.exists() && !force {
                Output::warning(&format!(
                    "Config already exists at {}. Use --force to overwrite.",
                    path.display()
                ));
                return Ok(());
            }
            Settings::default().save_to(&path)?;
            Output::success(&format!("Wrote default config to {}", path.display()));
        }
    }

    Ok(())
}
