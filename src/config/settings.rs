//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream endpoint settings for the stdio bridge.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_protocols = ["http", "https"];
        if !valid_protocols.contains(&self.upstream.protocol.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid upstream protocol '{}'. Must be one of: http, https",
                    self.upstream.protocol
                ),
            });
        }
        if self.upstream.path.is_empty() || !self.upstream.path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid upstream path '{}'. Must start with '/'",
                    self.upstream.path
                ),
            });
        }
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the HTTP transport binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:7073".to_string()
}

/// Upstream MCP endpoint configuration for the bridge.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// URL scheme: "http" or "https".
    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// Upstream host name.
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Upstream TCP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request path of the MCP endpoint.
    #[serde(default = "default_path")]
    pub path: String,

    /// Per-request timeout in seconds. A hung upstream fails the request
    /// instead of stalling the bridge.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Skip TLS certificate verification. Development use only.
    #[serde(default)]
    pub danger_accept_invalid_certs: bool,
}

impl UpstreamConfig {
    /// Returns the full upstream URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.hostname, self.port, self.path
        )
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            protocol: default_protocol(),
            hostname: default_hostname(),
            port: default_port(),
            path: default_path(),
            request_timeout_secs: default_timeout_secs(),
            danger_accept_invalid_certs: false,
        }
    }
}

fn default_protocol() -> String {
    "http".to_string()
}

fn default_hostname() -> String {
    "localhost".to_string()
}

const fn default_port() -> u16 {
    7073
}

fn default_path() -> String {
    "/api/mcp".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
