//! `innkeep config`: inspect the loaded configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `innkeep config get`.
const KNOWN_KEYS: &[&str] = &[
    "hotel.name",
    "hotel.currency",
    "guest.first_name",
    "guest.last_name",
    "guest.email",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&format!("{key} = {value:?}"))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            output.print(&path.display().to_string())?;
            if !path.exists() {
                output.warning("File does not exist; built-in defaults are in use")?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "hotel.name" => Ok(config.hotel.name.clone()),
        "hotel.currency" => Ok(config.hotel.currency.clone()),
        "guest.first_name" => Ok(config.guest.first_name.clone()),
        "guest.last_name" => Ok(config.guest.last_name.clone()),
        "guest.email" => Ok(config.guest.email.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!(
                "Unknown config key: '{key}' (known keys: {})",
                KNOWN_KEYS.join(", ")
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
