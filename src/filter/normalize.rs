//! Acyclicity pass run before redaction.
//!
//! `serde_json::Value` is a tree by construction, so true reference cycles
//! cannot reach the filter; what can reach it is pathologically deep nesting,
//! which would otherwise drive both the normalization and redaction walks to
//! stack overflow. This pass deep-copies the input and collapses every
//! container nested beyond [`MAX_DEPTH`] to the fixed marker string, which
//! guarantees termination of everything downstream at the cost of losing the
//! over-deep remainder.

use serde_json::Value;

/// Marker substituted for subtrees beyond the depth bound.
pub const BACKREF_MARKER: &str = "[Circular]";

/// Containers nested deeper than this collapse to [`BACKREF_MARKER`].
/// Log payloads sit nowhere near this bound in practice.
const MAX_DEPTH: usize = 128;

/// Returns a copy of `value` in which every over-deep container is replaced
/// by the marker. Leaves pass through at any depth.
pub(crate) fn acyclic(value: Value) -> Value {
    clamp(value, 0)
}

fn clamp(value: Value, depth: usize) -> Value {
    match value {
        Value::Object(map) => {
            if depth >= MAX_DEPTH {
                return marker();
            }
            Value::Object(
                map.into_iter()
                    .map(|(key, nested)| (key, clamp(nested, depth + 1)))
                    .collect(),
            )
        }
        Value::Array(items) => {
            if depth >= MAX_DEPTH {
                return marker();
            }
            Value::Array(
                items
                    .into_iter()
                    .map(|nested| clamp(nested, depth + 1))
                    .collect(),
            )
        }
        leaf => leaf,
    }
}

fn marker() -> Value {
    Value::String(BACKREF_MARKER.to_string())
}

// =============================================================================
// Tests
// =============================================================================
