//! stdio-to-HTTP bridge.
//!
//! Desktop MCP clients speak newline-delimited JSON-RPC over stdio; the
//! server speaks HTTP. The bridge forwards each stdin line as one POST and
//! writes back exactly one response line per request. stdout carries nothing
//! but JSON-RPC envelopes; all diagnostics go to stderr via tracing.
//!
//! Each line is handled independently: parse, forward, validate, write. A
//! line that fails to parse, forward, or validate produces a synthesized
//! `-32603` envelope instead of killing the process.

use std::io;
use std::time::Duration;

use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::UpstreamConfig;
use crate::error::BridgeError;

/// Forwards stdin request lines to the MCP server over HTTP.
pub struct Bridge {
    client: reqwest::Client,
    url: String,
}

impl Bridge {
    /// Builds the HTTP client for the configured upstream endpoint.
    ///
    /// Certificate validation is relaxed only when the configuration
    /// explicitly opts in, for development against self-signed endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ClientSetup`] if the client cannot be built.
    pub fn new(upstream: &UpstreamConfig) -> Result<Self, BridgeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(upstream.request_timeout_secs))
            .danger_accept_invalid_certs(upstream.danger_accept_invalid_certs)
            .build()
            .map_err(|source| BridgeError::ClientSetup { source })?;

        Ok(Self {
            client,
            url: upstream.url(),
        })
    }

    /// Runs the bridge main loop until stdin closes or a termination signal
    /// arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if stdio reading or writing fails.
    #[cfg(unix)]
    pub async fn run(&self) -> io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(io::Error::other)?;

        let mut reader = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!(url = %self.url, "bridge started, waiting for messages");

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    return Ok(());
                }

                line = reader.next_line() => {
                    let Some(line) = line? else {
                        tracing::info!("stdin closed, exiting");
                        return Ok(());
                    };
                    if let Some(out) = self.process_line(&line).await {
                        stdout.write_all(out.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                }
            }
        }
    }

    /// Runs the bridge main loop until stdin closes or Ctrl+C arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if stdio reading or writing fails.
    #[cfg(windows)]
    pub async fn run(&self) -> io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut reader = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!(url = %self.url, "bridge started, waiting for messages");

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    return Ok(());
                }

                line = reader.next_line() => {
                    let Some(line) = line? else {
                        tracing::info!("stdin closed, exiting");
                        return Ok(());
                    };
                    if let Some(out) = self.process_line(&line).await {
                        stdout.write_all(out.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                }
            }
        }
    }

    /// Handles one stdin line, returning the stdout line to emit (if any).
    ///
    /// Notifications produce no output; every other line produces exactly
    /// one envelope, synthesized locally when anything goes wrong.
    async fn process_line(&self, line: &str) -> Option<String> {
        let request: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "failed to parse stdin line");
                return Some(local_error(&e.to_string()));
            }
        };

        let fallback_id = request.get("id").cloned().unwrap_or(Value::Null);
        let method = request.get("method").and_then(|v| v.as_str()).unwrap_or("?");
        tracing::debug!(method, "forwarding request");

        match self.forward(line).await {
            Ok(None) => {
                tracing::debug!("notification processed, no response needed");
                None
            }
            Ok(Some(upstream)) => {
                let cleaned = clean_response(&upstream, &fallback_id);
                match serde_json::to_string(&cleaned) {
                    Ok(out) => Some(out),
                    Err(e) => Some(local_error(&e.to_string())),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "forwarding failed");
                Some(local_error(&e.to_string()))
            }
        }
    }

    /// Posts one request body upstream.
    ///
    /// Returns `None` for HTTP 204 (the request was a notification);
    /// any other status is parsed as a JSON-RPC response body.
    async fn forward(&self, body: &str) -> Result<Option<Value>, BridgeError> {
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|source| BridgeError::Forward { source })?;

        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .map_err(|source| BridgeError::Forward { source })?;
        let value =
            serde_json::from_str(&text).map_err(|_| BridgeError::InvalidUpstreamJson)?;
        Ok(Some(value))
    }
}

/// Synthesizes a local error envelope for failures that never reached the
/// server (or whose response was unusable).
fn local_error(message: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {
            "code": -32603,
            "message": message,
        },
    })
    .to_string()
}

/// Rebuilds the upstream envelope from scratch so only well-typed fields
/// reach stdout.
///
/// The id is taken from the upstream response when non-null, then from the
/// original request, then defaults to `1`. Exactly one of `result`/`error`
/// is carried over; `result` wins when both are present.
fn clean_response(upstream: &Value, fallback_id: &Value) -> Value {
    let id = match upstream.get("id") {
        Some(id) if !id.is_null() => id.clone(),
        _ if fallback_id.is_null() => json!(1),
        _ => fallback_id.clone(),
    };

    let mut clean = Map::new();
    clean.insert("jsonrpc".to_string(), json!("2.0"));
    clean.insert("id".to_string(), id);

    if let Some(result) = upstream.get("result").filter(|r| !r.is_null()) {
        let mut result = result.clone();
        if let Some(object) = result.as_object_mut() {
            if let Some(tools) = object.get("tools").and_then(Value::as_array) {
                let rebuilt: Vec<Value> = tools.iter().map(clean_tool).collect();
                object.insert("tools".to_string(), Value::Array(rebuilt));
            }
            if let Some(content) = object.get("content").and_then(Value::as_array) {
                let rebuilt: Vec<Value> = content.iter().map(clean_content).collect();
                object.insert("content".to_string(), Value::Array(rebuilt));
            }
        }
        clean.insert("result".to_string(), result);
    } else if let Some(error) = upstream.get("error").filter(|e| !e.is_null()) {
        clean.insert("error".to_string(), clean_error(error));
    }

    Value::Object(clean)
}

/// Coerces a loosely-typed value to a string: strings pass through,
/// null/absent become empty, everything else is rendered as JSON text.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn clean_tool(tool: &Value) -> Value {
    let schema = match tool.get("inputSchema") {
        Some(schema) if !schema.is_null() => schema.clone(),
        _ => json!({
            "type": "object",
            "properties": {},
            "required": [],
        }),
    };
    json!({
        "name": coerce_string(tool.get("name")),
        "description": coerce_string(tool.get("description")),
        "inputSchema": schema,
    })
}

fn clean_content(item: &Value) -> Value {
    let kind = match item.get("type") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => "text".to_string(),
    };
    json!({
        "type": kind,
        "text": coerce_string(item.get("text")),
    })
}

fn clean_error(error: &Value) -> Value {
    let code = match error.get("code") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(-32603),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(-32603),
        _ => -32603,
    };
    let message = match error.get("message") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => "Unknown error".to_string(),
        Some(other) => other.to_string(),
    };

    let mut clean = Map::new();
    clean.insert("code".to_string(), json!(code));
    clean.insert("message".to_string(), json!(message));
    if let Some(data) = error.get("data").filter(|d| !d.is_null()) {
        clean.insert("data".to_string(), data.clone());
    }
    Value::Object(clean)
}
