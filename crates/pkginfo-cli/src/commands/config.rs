//! `pkginfo config` — inspect configuration and write a starter file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    config: &AppConfig,
    config_file: Option<&PathBuf>,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.result(&display_value(&value))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current configuration:")?;
                let text = config.to_toml().with_cli_context(|| "listing configuration")?;
                output.result(text.trim_end())?;
            }
        }

        ConfigCommands::Path => match AppConfig::active_path(config_file) {
            Some(path) => output.result(&path.display().to_string())?,
            None => {
                output.info("No configuration file found; using built-in defaults")?;
                if let Some(path) = AppConfig::config_path() {
                    output.result(&path.display().to_string())?;
                }
            }
        },

        ConfigCommands::Init { local, force } => {
            let path = if local {
                PathBuf::from(LOCAL_CONFIG_FILE)
            } else {
                AppConfig::config_path().ok_or_else(|| CliError::ConfigError {
                    message: "no user configuration directory on this platform".into(),
                    source: None,
                })?
            };
            write_default_config(&path, force)?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<serde_json::Value> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

/// Strings print bare, lists comma-joined, tables as TOML.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

fn write_default_config(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::FileExists {
            path: path.to_path_buf(),
        });
    }

    let text = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "serialising default configuration")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, text).with_cli_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), "Configuration written");
    Ok(())
}
