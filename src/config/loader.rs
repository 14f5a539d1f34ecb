/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{HolidayError, Result};
use crate::types::Config;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        HolidayError::ConfigError(format!(
            "Failed to read config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| HolidayError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.num_voluntary_holidays < 0 {
        return Err(HolidayError::ConfigError(format!(
            "Invalid num_voluntary_holidays: {}",
            config.num_voluntary_holidays
        )));
    }

    if config.exact_warn_threshold == 0 {
        return Err(HolidayError::ConfigError(
            "exact_warn_threshold must be > 0".to_string(),
        ));
    }

    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        return Err(HolidayError::ConfigError(format!(
            "Invalid log_level: {} (expected one of {})",
            config.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}
