//! Reduction of error-shaped values to loggable fields.
//!
//! Errors reaching a log payload are serialized to plain data instead of
//! dumped raw: `name` and `message` survive, stack traces never do. The
//! HTTP-client shape (an error carrying `config` and a `response` object)
//! additionally keeps a reduced response so status, headers, and body remain
//! diagnosable. The reduced map is filtered again by the caller, so sensitive
//! keys inside headers or body data are still redacted.

use serde_json::{Map, Value, json};

/// Fields kept from an HTTP-client error response.
const RESPONSE_FIELDS: &[&str] = &["status", "statusText", "headers", "data"];

/// True for objects with a string `message` plus either an error marker
/// (`name`/`stack`) or the HTTP-client shape.
pub(crate) fn is_error_like(map: &Map<String, Value>) -> bool {
    if !matches!(map.get("message"), Some(Value::String(_))) {
        return false;
    }
    map.contains_key("stack")
        || matches!(map.get("name"), Some(Value::String(_)))
        || (map.contains_key("config") && matches!(map.get("response"), Some(Value::Object(_))))
}

/// Rebuilds an error-shaped object keeping only safe fields.
pub(crate) fn reduce(map: &Map<String, Value>) -> Map<String, Value> {
    let mut safe = Map::new();
    safe.insert(
        "name".to_string(),
        map.get("name")
            .cloned()
            .unwrap_or_else(|| Value::String("Error".to_string())),
    );
    safe.insert(
        "message".to_string(),
        map.get("message").cloned().unwrap_or(Value::Null),
    );

    if let Some(Value::Object(response)) = map.get("response") {
        let mut reduced = Map::new();
        for field in RESPONSE_FIELDS {
            if let Some(value) = response.get(*field) {
                reduced.insert((*field).to_string(), value.clone());
            }
        }
        safe.insert("response".to_string(), Value::Object(reduced));
        if let Some(config) = map.get("config") {
            safe.insert("config".to_string(), config.clone());
        }
    }

    safe
}

/// Converts a Rust error into the loggable error shape.
///
/// The source chain, when present, is flattened into a `source` field; stack
/// information is never captured.
///
/// # Example
///
/// ```rust
/// use scrublog::error_value;
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
/// let value = error_value(&err);
/// assert_eq!(value["name"], "Error");
/// assert_eq!(value["message"], "missing config");
/// ```
#[must_use]
pub fn error_value(err: &(dyn std::error::Error + 'static)) -> Value {
    let mut value = json!({
        "name": "Error",
        "message": err.to_string(),
    });
    if let Some(source) = err.source() {
        value["source"] = Value::String(source.to_string());
    }
    value
}

// =============================================================================
// Tests
// =============================================================================
