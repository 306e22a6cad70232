//! JSON-RPC 2.0 message types for the MCP protocol.
//!
//! All messages follow the JSON-RPC 2.0 specification with MCP-specific
//! extensions.
//!
//! # Wire Constraints
//!
//! - Request `id` may be a number, a string, `null`, or absent. Responses
//!   echo the request id; when it is absent or `null` the response carries
//!   the literal integer `1` instead, so a response id is never `null` for a
//!   request that parsed. The only `null` response id is the parse-error
//!   case, where no request id could be read.
//! - A response carries exactly one of `result`/`error`; the absent side is
//!   skipped during serialisation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The MCP protocol version this implementation supports.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported during capability negotiation.
pub const SERVER_NAME: &str = "Project Manager MCP Server";

/// A JSON-RPC 2.0 request message.
///
/// Deserialisation is deliberately lenient: a missing `method` routes as an
/// unknown method rather than failing the parse, and `id` stays an opaque
/// JSON value so string and numeric ids round-trip unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol tag, nominally "2.0".
    #[serde(default)]
    pub jsonrpc: Option<String>,

    /// Opaque request identifier (number, string, `null`, or absent).
    #[serde(default)]
    pub id: Option<Value>,

    /// The method to invoke.
    #[serde(default)]
    pub method: String,

    /// Optional parameters for the method.
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Returns the id to echo in the response: the request's own id when
    /// present and non-null, otherwise the literal integer `1`.
    #[must_use]
    pub fn effective_id(&self) -> Value {
        match &self.id {
            Some(id) if !id.is_null() => id.clone(),
            _ => json!(1),
        }
    }
}

/// A JSON-RPC 2.0 response message (success or error).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// Always "2.0".
    pub jsonrpc: &'static str,

    /// The request id this response corresponds to.
    pub id: Value,

    /// The result of the method call, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// The error details, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorData>,
}

impl JsonRpcResponse {
    /// Creates a success response.
    #[must_use]
    pub const fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error response.
    #[must_use]
    pub const fn error(id: Value, error: JsonRpcErrorData) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Creates the parse-error response (id cannot be determined).
    #[must_use]
    pub fn parse_error() -> Self {
        Self::error(Value::Null, JsonRpcErrorData::parse_error())
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcErrorData {
    /// The error code.
    pub code: i64,

    /// A short description of the error.
    pub message: String,

    /// Additional information about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcErrorData {
    /// Invalid JSON was received by the server (-32700).
    #[must_use]
    pub fn parse_error() -> Self {
        Self {
            code: -32700,
            message: "Parse error".to_string(),
            data: None,
        }
    }

    /// Internal JSON-RPC error (-32603) with a custom message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: -32603,
            message: message.into(),
            data: None,
        }
    }
}

/// Parameters for a tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,

    /// Arguments for the tool. Optional at the wire level; a required
    /// argument missing from the map is a handler-local error.
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
///
/// Failures are carried as text inside `content`, never as JSON-RPC errors;
/// tool-calling clients expect a text-content shape even on failure.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
}

impl ToolCallResult {
    /// Creates a single-item text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }
}

/// Builds the fixed result for the `initialize` method.
#[must_use]
pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": MCP_PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_with_numeric_id() {
        let json = r#"{"jsonrpc": "2.0", "id": 5, "method": "tools/list"}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "tools/list");
        assert_eq!(req.effective_id(), json!(5));
    }

    #[test]
    fn parse_request_with_string_id() {
        let json = r#"{"jsonrpc": "2.0", "id": "abc-123", "method": "initialize"}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.effective_id(), json!("abc-123"));
    }

    #[test]
    fn absent_id_defaults_to_one() {
        let json = r#"{"jsonrpc": "2.0", "method": "tools/list"}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.effective_id(), json!(1));
    }

    #[test]
    fn null_id_defaults_to_one() {
        let json = r#"{"jsonrpc": "2.0", "id": null, "method": "tools/list"}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.effective_id(), json!(1));
    }

    #[test]
    fn missing_method_parses_as_empty() {
        let json = r#"{"jsonrpc": "2.0", "id": 1}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(req.method.is_empty());
    }

    #[test]
    fn serialise_success_response_omits_error() {
        let response = JsonRpcResponse::success(json!(1), json!({"ok": true}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""jsonrpc":"2.0""#));
        assert!(json.contains(r#""id":1"#));
        assert!(json.contains(r#""result":{"ok":true}"#));
        assert!(!json.contains("error"));
    }

    #[test]
    fn serialise_error_response_omits_result() {
        let response = JsonRpcResponse::error(json!(7), JsonRpcErrorData::internal("boom"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""id":7"#));
        assert!(json.contains(r#""code":-32603"#));
        assert!(json.contains("boom"));
        assert!(!json.contains("result"));
    }

    #[test]
    fn parse_error_response_has_null_id() {
        let response = JsonRpcResponse::parse_error();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""id":null"#));
        assert!(json.contains(r#""code":-32700"#));
        assert!(json.contains("Parse error"));
    }

    #[test]
    fn tool_call_params_arguments_optional() {
        let params: ToolCallParams =
            serde_json::from_str(r#"{"name": "get_all_workers"}"#).unwrap();
        assert_eq!(params.name, "get_all_workers");
        assert!(params.arguments.is_none());
    }

    #[test]
    fn tool_call_result_serialises_text_content() {
        let result = ToolCallResult::text("hello");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"content":[{"type":"text","text":"hello"}]}"#);
    }

    #[test]
    fn initialize_result_shape() {
        let result = initialize_result();
        assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(result["capabilities"]["tools"], json!({}));
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }
}
