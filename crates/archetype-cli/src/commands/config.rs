//! `archetype config`: inspect configuration values.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

/// Look up a dotted key; unset optional values print as an empty string.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let mut current = &root;
    for segment in key.split('.') {
        current = current.get(segment).ok_or_else(unknown)?;
    }

    match current {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Object(_) => Err(CliError::ConfigError {
            message: format!("'{key}' is a section, not a value"),
            source: None,
        }),
        other => Ok(other.to_string()),
    }
}
