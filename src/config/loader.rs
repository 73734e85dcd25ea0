//! Configuration loading from disk.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::WikiConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WikiConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WikiConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config)?;

    Ok(config)
}

/// Validate a configuration, collecting every problem rather than stopping
/// at the first.
pub fn validate_config(config: &WikiConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(format!(
            "listener.bind_address {:?} is not a valid socket address",
            config.listener.bind_address
        ));
    }

    if config.wiki.fallback_title.is_empty()
        || !config
            .wiki
            .fallback_title
            .bytes()
            .all(|b| b.is_ascii_alphanumeric())
    {
        errors.push(format!(
            "wiki.fallback_title {:?} must be one or more alphanumeric characters",
            config.wiki.fallback_title
        ));
    }

    if config.listener.port_file.is_empty() {
        errors.push("listener.port_file must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}
