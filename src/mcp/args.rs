//! Tool-call argument extraction and coercion.
//!
//! Wire arguments are loosely typed: a numeric argument may arrive as a JSON
//! number or as a numeric string, depending on the client. Each primitive
//! target has one shared coercion function here so the three-way type check
//! is not repeated in every handler.

use serde_json::{Map, Value};

use crate::error::ToolError;

/// Borrowed view over a tool call's argument map.
///
/// The map itself is optional at the wire level; every `require_*` accessor
/// reports an absent map the same way as an absent key.
#[derive(Debug, Clone, Copy)]
pub struct ToolArgs<'a> {
    values: Option<&'a Map<String, Value>>,
}

impl<'a> ToolArgs<'a> {
    /// Wraps the (optional) arguments map of a tools/call request.
    #[must_use]
    pub const fn new(values: Option<&'a Map<String, Value>>) -> Self {
        Self { values }
    }

    /// An empty argument set, for tools that declare no parameters.
    #[must_use]
    pub const fn empty() -> Self {
        Self { values: None }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.values.and_then(|m| m.get(key))
    }

    /// Extracts a required integer argument.
    ///
    /// Accepts a JSON number with an integral value or a string that parses
    /// as an integer.
    ///
    /// # Errors
    ///
    /// `MissingParameter` if the key is absent, `NotANumber` if the value
    /// cannot be coerced.
    pub fn require_i64(&self, key: &str) -> Result<i64, ToolError> {
        let value = self.get(key).ok_or_else(|| ToolError::missing(key))?;
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| ToolError::not_a_number(key)),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ToolError::not_a_number(key)),
            _ => Err(ToolError::not_a_number(key)),
        }
    }

    /// Extracts a required string argument.
    ///
    /// Non-string values are rendered to their JSON textual form; wire values
    /// are sometimes pre-typed, sometimes raw JSON nodes.
    ///
    /// # Errors
    ///
    /// `MissingParameter` if the key is absent.
    pub fn require_string(&self, key: &str) -> Result<String, ToolError> {
        let value = self.get(key).ok_or_else(|| ToolError::missing(key))?;
        Ok(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args_from(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn integer_from_json_number() {
        let map = args_from(json!({"id": 42}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(args.require_i64("id").unwrap(), 42);
    }

    #[test]
    fn integer_from_numeric_string() {
        let map = args_from(json!({"id": "17"}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(args.require_i64("id").unwrap(), 17);
    }

    #[test]
    fn integer_from_padded_string() {
        let map = args_from(json!({"id": " 3 "}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(args.require_i64("id").unwrap(), 3);
    }

    #[test]
    fn integer_rejects_non_numeric() {
        let map = args_from(json!({"id": "abc"}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(
            args.require_i64("id").unwrap_err(),
            ToolError::not_a_number("id")
        );
    }

    #[test]
    fn integer_rejects_fractional_number() {
        let map = args_from(json!({"id": 1.5}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(
            args.require_i64("id").unwrap_err(),
            ToolError::not_a_number("id")
        );
    }

    #[test]
    fn integer_rejects_array() {
        let map = args_from(json!({"id": [1]}));
        let args = ToolArgs::new(Some(&map));
        assert!(args.require_i64("id").is_err());
    }

    #[test]
    fn missing_key_reports_missing_not_type_error() {
        let map = args_from(json!({"other": 1}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(args.require_i64("id").unwrap_err(), ToolError::missing("id"));
    }

    #[test]
    fn absent_map_reports_missing() {
        let args = ToolArgs::empty();
        assert_eq!(
            args.require_string("name").unwrap_err(),
            ToolError::missing("name")
        );
    }

    #[test]
    fn string_passthrough() {
        let map = args_from(json!({"name": "Carlos"}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(args.require_string("name").unwrap(), "Carlos");
    }

    #[test]
    fn string_coerces_number() {
        let map = args_from(json!({"name": 5}));
        let args = ToolArgs::new(Some(&map));
        assert_eq!(args.require_string("name").unwrap(), "5");
    }
}
