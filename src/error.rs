//! Error types for project-manager-mcp.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors raised while extracting tool-call arguments.
///
/// These never escape the dispatcher as JSON-RPC errors; they are rendered
/// into the tool's text result ("Error executing tool: ...").
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToolError {
    /// A declared-required argument was absent from the arguments map.
    #[error("required parameter '{key}' is missing")]
    MissingParameter {
        /// Name of the missing parameter.
        key: String,
    },

    /// The wire value could not be coerced to an integer.
    #[error("parameter '{key}' must be a number")]
    NotANumber {
        /// Name of the offending parameter.
        key: String,
    },
}

impl ToolError {
    /// Creates a missing-parameter error.
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingParameter { key: key.into() }
    }

    /// Creates a not-a-number error.
    #[must_use]
    pub fn not_a_number(key: impl Into<String>) -> Self {
        Self::NotANumber { key: key.into() }
    }
}

/// Errors raised by the stdio-to-HTTP bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    ClientSetup {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The forward request to the MCP server failed.
    #[error("HTTP request failed: {source}")]
    Forward {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The server responded with a body that is not valid JSON.
    #[error("invalid JSON response from MCP server")]
    InvalidUpstreamJson,
}
