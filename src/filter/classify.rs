//! Shape classification for the redaction walk.
//!
//! Shapes overlap (a string may parse as JSON, an object may be an error),
//! so classification happens once per node, in a fixed dispatch order, before
//! any recursion. The resulting [`ValueKind`] carries the borrowed payload so
//! the walker never re-probes a shape it already decided.

use serde_json::{Map, Value};

use super::error_like;

/// Interop tag used by lossless-JSON parsers for numbers that exceed double
/// precision. The wrapper is unwrapped rather than recursed into.
const LOSSLESS_NUMBER_TAG: &str = "isLosslessNumber";

// =============================================================================
// ValueKind - closed classification of a single node
// =============================================================================

/// The transformation that applies to one value.
///
/// `serde_json::Value` is a closed sum, so every node classifies into exactly
/// one of these; there is no opaque fallback arm.
#[derive(Debug)]
pub(crate) enum ValueKind<'a> {
    Null,
    Bool,
    Number,
    /// A string that is not a JSON-encoded object or array.
    Text,
    /// A string that parsed as a JSON object or array; carries the parse.
    JsonText(Value),
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    /// An object with error shape, to be reduced to safe fields.
    ErrorLike(&'a Map<String, Value>),
    /// A lossless-number wrapper; carries the wrapped value.
    NumericWrapper(&'a Value),
}

/// Classifies a node. Error shape is checked before the generic object case,
/// and the lossless wrapper before plain recursion, so the more specific
/// transformations win.
pub(crate) fn classify(value: &Value) -> ValueKind<'_> {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::Array(items) => ValueKind::Array(items),
        Value::Object(map) => {
            if error_like::is_error_like(map) {
                ValueKind::ErrorLike(map)
            } else if let Some(inner) = lossless_number(map) {
                ValueKind::NumericWrapper(inner)
            } else {
                ValueKind::Object(map)
            }
        }
        Value::String(text) => match parse_json_text(text) {
            Some(parsed) => ValueKind::JsonText(parsed),
            None => ValueKind::Text,
        },
    }
}

fn lossless_number(map: &Map<String, Value>) -> Option<&Value> {
    if map.get(LOSSLESS_NUMBER_TAG) == Some(&Value::Bool(true)) {
        map.get("value")
    } else {
        None
    }
}

/// Only strings that look like (and parse as) JSON objects or arrays count as
/// JSON text. Scalar-looking strings such as `"123"` or `"true"` stay plain
/// text: re-encoding them risks changing numeric representation, and there is
/// nothing inside them to redact.
fn parse_json_text(text: &str) -> Option<Value> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return None;
    }
    serde_json::from_str(text).ok()
}

// =============================================================================
// Tests
// =============================================================================
