//! Tool registry: a fixed, enumerable set of named tools.
//!
//! One insertion-ordered map backs both discovery (`tools/list`) and
//! invocation (`tools/call`), so the two surfaces cannot drift apart. The
//! registry holds metadata and a lookup table only; the handlers carry the
//! business logic.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::mcp::args::ToolArgs;

/// A tool handler: coerced arguments in, formatted text out.
pub type ToolHandler = Box<dyn Fn(&ToolArgs) -> Result<String, ToolError> + Send + Sync>;

/// Metadata for a registered tool, as exposed by tools/list.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// JSON Schema for the tool's input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: ToolHandler,
}

/// Process-wide catalogue of tools, read-only after startup.
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under its descriptor name.
    ///
    /// # Panics
    ///
    /// Panics if the name is already registered. Tool names are startup
    /// constants; a duplicate is a programming error, not a runtime
    /// condition.
    pub fn register(&mut self, descriptor: ToolDescriptor, handler: ToolHandler) {
        let name = descriptor.name.clone();
        let previous = self.tools.insert(
            name.clone(),
            RegisteredTool {
                descriptor,
                handler,
            },
        );
        assert!(previous.is_none(), "duplicate tool name: {name}");
    }

    /// Returns all descriptors in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&ToolDescriptor> {
        self.tools.values().map(|t| &t.descriptor).collect()
    }

    /// Returns all tool names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Invokes the named tool, if registered.
    ///
    /// Returns `None` for an unknown name; the dispatcher turns that into a
    /// textual error result rather than a transport failure.
    #[must_use]
    pub fn call(&self, name: &str, args: &ToolArgs) -> Option<Result<String, ToolError>> {
        self.tools.get(name).map(|t| (t.handler)(args))
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// Helpers for building input schemas. Property type tags are the wire-level
// "number"/"string" strings regardless of how the handler coerces them.

/// Builds an object schema with named properties and a required list.
#[must_use]
pub fn object_schema(properties: Value, required: &[&str]) -> Value {
    if required.is_empty() {
        json!({
            "type": "object",
            "properties": properties,
        })
    } else {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Builds a numeric property schema.
#[must_use]
pub fn number_property(description: &str) -> Value {
    json!({
        "type": "number",
        "description": description,
    })
}

/// Builds a string property schema.
#[must_use]
pub fn string_property(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
    })
}
