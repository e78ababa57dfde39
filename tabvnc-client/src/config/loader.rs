//! Configuration loader
//!
//! Parses the embedded TOML configuration, falling back to built-in
//! defaults when it is malformed or invalid.

use tabvnc_core::config::{ConfigError, ViewerConfig};

/// Configuration compiled into the image
pub const DEFAULT_CONFIG: &str = include_str!("../../viewer.toml");

/// Parse and validate a TOML configuration document
pub fn parse_config(text: &str) -> Result<ViewerConfig, ConfigError> {
    let config: ViewerConfig = toml::from_str(text).map_err(|_| ConfigError::Parse)?;
    config.validate()?;
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> ViewerConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            info!("Loaded configuration for {}:{}", config.server.host.as_str(), config.server.port);
            config
        }
        Err(e) => {
            warn!("Invalid embedded configuration ({:?}), using defaults", e);
            ViewerConfig::default()
        }
    }
}
