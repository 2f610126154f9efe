// src/config/io.rs
use super::types::Config;
use crate::error::{LabelError, Result};
use std::fs;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "l321.toml";

/// Reads a TOML config file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, `Config` if it is not valid TOML.
pub fn load_toml_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| LabelError::io(e, path))?;
    parse_toml(&content)
        .map_err(|e| LabelError::Config(format!("{}: {e}", path.display())))
}

/// Parses TOML text, filling missing keys with defaults.
///
/// # Errors
/// Returns the TOML deserialization error message.
pub fn parse_toml(content: &str) -> std::result::Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

/// Renders the config as TOML.
///
/// # Errors
/// Returns `Config` if serialization fails.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| LabelError::Config(e.to_string()))
}
