//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RegistryConfig;
use crate::config::validation::validate_config;
use crate::error::{validation_error, Result};

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RegistryConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        validation_error(
            format!("cannot read config file {}: {}", path.display(), e),
            ["config_path"],
        )
    })?;
    let config: RegistryConfig = toml::from_str(&content).map_err(|e| {
        validation_error(
            format!("cannot parse config file {}: {}", path.display(), e),
            ["config_path"],
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}
