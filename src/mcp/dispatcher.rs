//! Request dispatcher: one raw JSON-RPC body in, at most one response out.
//!
//! The dispatcher is transport-agnostic and stateless; the HTTP adapter maps
//! [`Dispatch::Reply`] to a 200 response and [`Dispatch::NoContent`] to 204.
//!
//! # Routing order
//!
//! 1. Malformed body → `-32700` "Parse error" with a `null` id (the only
//!    path that does not echo the request id).
//! 2. `notifications/*` → no response at all; notifications are one-way and
//!    no handler runs.
//! 3. `initialize` → fixed protocol/capability/serverInfo descriptor.
//! 4. `tools/list` → the registry's descriptors in registration order.
//! 5. `tools/call` → registry lookup. Unknown names and handler failures
//!    are downgraded to *successful* text results; tool-level failure never
//!    becomes a JSON-RPC error.
//! 6. Anything else → `-32603` "Unknown method: ...".

use serde_json::Value;

use crate::mcp::args::ToolArgs;
use crate::mcp::protocol::{
    initialize_result, JsonRpcErrorData, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    ToolCallResult,
};
use crate::mcp::registry::ToolRegistry;

/// Outcome of dispatching one request body.
#[derive(Debug)]
pub enum Dispatch {
    /// A response envelope to send back.
    Reply(JsonRpcResponse),
    /// The request was a notification; acknowledge with no body.
    NoContent,
}

/// Routes parsed requests to the tool registry and wraps the results.
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    /// Creates a dispatcher over a fully populated registry.
    #[must_use]
    pub const fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// The registry backing this dispatcher.
    #[must_use]
    pub const fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handles one raw request body.
    #[must_use]
    pub fn handle(&self, body: &str) -> Dispatch {
        let Ok(request) = serde_json::from_str::<JsonRpcRequest>(body) else {
            tracing::warn!("received malformed request body");
            return Dispatch::Reply(JsonRpcResponse::parse_error());
        };

        self.handle_request(&request)
    }

    /// Handles an already-deserialised request envelope.
    #[must_use]
    pub fn handle_request(&self, request: &JsonRpcRequest) -> Dispatch {
        if request.method.starts_with("notifications/") {
            tracing::debug!(method = %request.method, "received notification");
            return Dispatch::NoContent;
        }

        let id = request.effective_id();
        tracing::debug!(method = %request.method, "dispatching request");

        let result = match request.method.as_str() {
            "initialize" => Ok(initialize_result()),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(request.params.as_ref()),
            other => Err(JsonRpcErrorData::internal(format!(
                "Unknown method: {other}"
            ))),
        };

        Dispatch::Reply(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn handle_tools_list(&self) -> Result<Value, JsonRpcErrorData> {
        serde_json::to_value(serde_json::json!({
            "tools": self.registry.descriptors(),
        }))
        .map_err(|e| JsonRpcErrorData::internal(format!("Internal error: {e}")))
    }

    /// The outer envelope parsed, so a bad params shape is an internal error
    /// (-32603), not a parse error.
    fn handle_tools_call(&self, params: Option<&Value>) -> Result<Value, JsonRpcErrorData> {
        let params: ToolCallParams =
            serde_json::from_value(params.cloned().unwrap_or(Value::Null))
                .map_err(|e| JsonRpcErrorData::internal(format!("Internal error: {e}")))?;

        let args = ToolArgs::new(params.arguments.as_ref());

        let text = match self.registry.call(&params.name, &args) {
            None => {
                tracing::warn!(tool = %params.name, "unknown tool requested");
                format!("Error: unknown tool '{}'", params.name)
            }
            Some(Ok(text)) => text,
            Some(Err(error)) => {
                tracing::warn!(tool = %params.name, error = %error, "tool execution failed");
                format!("Error executing tool: {error}")
            }
        };

        serde_json::to_value(ToolCallResult::text(text))
            .map_err(|e| JsonRpcErrorData::internal(format!("Internal error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::registry::{number_property, object_schema, ToolDescriptor};
    use serde_json::json;

    fn test_dispatcher() -> Dispatcher {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolDescriptor {
                name: "double".to_string(),
                description: "doubles a number".to_string(),
                input_schema: object_schema(json!({"id": number_property("value")}), &["id"]),
            },
            Box::new(|args| {
                let id = args.require_i64("id")?;
                Ok(format!("{}", id * 2))
            }),
        );
        Dispatcher::new(registry)
    }

    fn reply(dispatch: Dispatch) -> JsonRpcResponse {
        match dispatch {
            Dispatch::Reply(r) => r,
            Dispatch::NoContent => panic!("expected a reply"),
        }
    }

    #[test]
    fn malformed_body_yields_parse_error_with_null_id() {
        let response = reply(test_dispatcher().handle("not json at all"));
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, -32700);
    }

    #[test]
    fn notification_produces_no_reply() {
        let dispatch = test_dispatcher()
            .handle(r#"{"jsonrpc":"2.0","method":"notifications/initialized","params":{}}"#);
        assert!(matches!(dispatch, Dispatch::NoContent));
    }

    #[test]
    fn notification_with_id_still_produces_no_reply() {
        let dispatch = test_dispatcher()
            .handle(r#"{"jsonrpc":"2.0","id":9,"method":"notifications/cancelled"}"#);
        assert!(matches!(dispatch, Dispatch::NoContent));
    }

    #[test]
    fn unknown_method_is_internal_error() {
        let response =
            reply(test_dispatcher().handle(r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#));
        assert_eq!(response.id, json!(3));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32603);
        assert_eq!(error.message, "Unknown method: resources/list");
    }

    #[test]
    fn id_echo_preserves_type() {
        let response = reply(
            test_dispatcher().handle(r#"{"jsonrpc":"2.0","id":"req-1","method":"initialize"}"#),
        );
        assert_eq!(response.id, json!("req-1"));
        assert!(response.result.is_some());
    }

    #[test]
    fn absent_id_becomes_one() {
        let response = reply(test_dispatcher().handle(r#"{"jsonrpc":"2.0","method":"initialize"}"#));
        assert_eq!(response.id, json!(1));
    }

    #[test]
    fn tools_call_without_params_is_internal_error() {
        let response =
            reply(test_dispatcher().handle(r#"{"jsonrpc":"2.0","id":2,"method":"tools/call"}"#));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32603);
        assert!(error.message.starts_with("Internal error:"));
    }

    #[test]
    fn unknown_tool_is_text_result_not_error() {
        let body = r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"bogus"}}"#;
        let response = reply(test_dispatcher().handle(body));
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(
            result["content"][0]["text"],
            json!("Error: unknown tool 'bogus'")
        );
    }

    #[test]
    fn handler_failure_is_text_result_not_error() {
        let body = r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"double","arguments":{"id":"x"}}}"#;
        let response = reply(test_dispatcher().handle(body));
        assert!(response.error.is_none());
        let text = response.result.unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        assert_eq!(text, "Error executing tool: parameter 'id' must be a number");
    }

    #[test]
    fn successful_call_returns_text_content() {
        let body = r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"double","arguments":{"id":21}}}"#;
        let response = reply(test_dispatcher().handle(body));
        assert_eq!(response.id, json!(10));
        assert_eq!(response.result.unwrap()["content"][0]["text"], json!("42"));
    }

    #[test]
    fn tools_list_returns_registered_descriptors() {
        let response =
            reply(test_dispatcher().handle(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#));
        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], json!("double"));
        assert!(tools[0]["inputSchema"]["properties"]["id"].is_object());
    }
}
