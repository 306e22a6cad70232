//! Configuration file loading and parsing.
//!
//! This module handles loading the configuration file from disk and parsing
//! it into validated, type-safe structures.
//!
//! # Configuration File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Path specified via the CLI argument
//! 2. Default location:
//!    - **Linux/macOS:** `~/.project-manager-mcp/config.json`
//!    - **Windows:** `%USERPROFILE%\.project-manager-mcp\config.json`
//!
//! Both binaries tolerate a missing or unreadable file: [`load_or_default`]
//! logs the problem and falls back to the built-in defaults
//! (`http://localhost:7073/api/mcp` upstream, `127.0.0.1:7073` bind).

mod settings;

pub use settings::{Config, LoggingConfig, ServerConfig, UpstreamConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".project-manager-mcp"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// If `path` is `None`, uses the platform-specific default location.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be found
/// - The file cannot be read
/// - The JSON is malformed
/// - Validation fails
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path().ok_or_else(|| ConfigError::NotFound {
            path: PathBuf::from("<default config path>"),
        })?,
    };

    if !config_path.exists() {
        return Err(ConfigError::NotFound { path: config_path });
    }

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}

/// Loads the configuration, falling back to defaults on any failure.
///
/// A missing or unreadable file must never keep the bridge or server from
/// starting; the failure is reported on stderr and the hard-coded defaults
/// are used instead.
#[must_use]
pub fn load_or_default(path: Option<&Path>) -> Config {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config not loaded, using defaults: {e}");
            Config::default()
        }
    }
}
