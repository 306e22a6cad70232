//! Model Context Protocol (MCP) dispatch layer.
//!
//! This module implements the protocol surface the transports share: message
//! types, the method router, the tool registry, and argument coercion. The
//! transports live elsewhere ([`crate::http`] for the server,
//! [`crate::bridge`] for the stdio adapter); everything here is
//! transport-agnostic and synchronous.
//!
//! # Architecture
//!
//! ```text
//! HTTP POST /mcp ──▶ Dispatcher ──▶ ToolRegistry ──▶ handler (text)
//!                        │
//!                        └──▶ JsonRpcResponse / no content
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod args;
pub mod dispatcher;
pub mod protocol;
pub mod registry;

pub use args::ToolArgs;
pub use dispatcher::{Dispatch, Dispatcher};
pub use protocol::{JsonRpcErrorData, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use registry::{ToolDescriptor, ToolRegistry};
