//! project-manager-mcp: MCP server exposing project-management tools over HTTP
//!
//! This library implements a JSON-RPC 2.0 tool-calling server for AI
//! assistants, backed by an in-memory store of workers, projects and tasks.
//!
//! # Architecture
//!
//! Two binaries share this crate:
//!
//! - **Server**: an HTTP endpoint (`POST /mcp`) that routes `initialize`,
//!   `tools/list` and `tools/call` requests through a stateless dispatcher
//!   into a registry of 17 project-management tools
//! - **Bridge**: a stdio adapter that lets desktop MCP clients reach the
//!   HTTP server, forwarding one request per stdin line and re-validating
//!   every response before it touches stdout
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`logging`] — Shared tracing setup for both binaries
//! - [`mcp`] — JSON-RPC envelopes, dispatcher and tool registry
//! - [`http`] — Axum transport adapter
//! - [`bridge`] — stdio-to-HTTP bridge
//! - [`store`] — In-memory worker/project/task store
//! - [`tools`] — Tool handlers and registry assembly

pub mod bridge;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod store;
pub mod tools;
