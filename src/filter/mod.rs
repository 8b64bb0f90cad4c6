//! The field-redaction engine.
//!
//! This module provides the machinery for sanitizing log payloads:
//!
//! - **`classify`**: The [`ValueKind`] classifier deciding, once per node,
//!   which transformation applies.
//! - **`normalize`**: The acyclicity pass collapsing pathological nesting to
//!   [`BACKREF_MARKER`] before redaction runs.
//! - **[`LoggerFilter`]**: The recursive walker combining the policy matcher
//!   with the classifier to produce a sanitized copy of the input.
//!
//! Which key names count as sensitive lives in `crate::policy`.

mod classify;
mod error_like;
mod normalize;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::policy::RedactionPolicy;
use classify::{ValueKind, classify};

pub use error_like::error_value;
pub use normalize::BACKREF_MARKER;

// =============================================================================
// LoggerFilter - recursive redaction over JSON-like payloads
// =============================================================================

/// Produces sanitized copies of arbitrary JSON-like payloads.
///
/// The filter owns one immutable [`RedactionPolicy`] and is otherwise
/// stateless: [`LoggerFilter::process`] is a pure function of its input and
/// the policy, performs no I/O, and can be called concurrently from any
/// number of sites.
///
/// Redaction is key-driven, not value-driven. A sensitive key collapses its
/// whole subtree to the placeholder string before any shape inspection; only
/// non-sensitive keys have their values classified and recursed into.
///
/// Failure semantics are fail-closed: input that cannot be serialized, or
/// that is not a JSON object, degrades to an empty map. The filter never
/// panics and never echoes unredacted data on a failure path.
#[derive(Clone, Debug, Default)]
pub struct LoggerFilter {
    policy: RedactionPolicy,
}

impl LoggerFilter {
    /// Creates a filter over the given policy.
    #[must_use]
    pub fn new(policy: RedactionPolicy) -> Self {
        Self { policy }
    }

    /// The policy this filter applies.
    #[must_use]
    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }

    /// Sanitizes a payload into a fresh key/value map.
    ///
    /// `None`, unserializable input, and non-object input all yield an empty
    /// map. The caller's value is never mutated; the result is always a
    /// newly built tree, so shared or otherwise read-only input is handled
    /// transparently.
    pub fn process<T>(&self, item: Option<&T>) -> Map<String, Value>
    where
        T: Serialize + ?Sized,
    {
        let Some(item) = item else {
            return Map::new();
        };
        let Ok(raw) = serde_json::to_value(item) else {
            return Map::new();
        };
        let Value::Object(map) = normalize::acyclic(raw) else {
            return Map::new();
        };
        self.filter_object(&map)
    }

    fn filter_object(&self, map: &Map<String, Value>) -> Map<String, Value> {
        map.iter()
            .map(|(key, value)| (key.clone(), self.filter_item(key, value)))
            .collect()
    }

    /// Applies the redaction decision for one (key, value) pair.
    ///
    /// The key decision is terminal: a sensitive key yields the placeholder
    /// without descending into the value. Otherwise the value's shape picks
    /// the transformation, with arrays and JSON-encoded strings filtered
    /// under the outer key.
    fn filter_item(&self, key: &str, value: &Value) -> Value {
        if self.policy.is_sensitive(key) {
            return Value::String(self.policy.placeholder().to_string());
        }

        match classify(value) {
            ValueKind::ErrorLike(map) => {
                let reduced = error_like::reduce(map);
                Value::Object(self.filter_object(&reduced))
            }
            ValueKind::NumericWrapper(inner) => inner.clone(),
            ValueKind::Object(map) => Value::Object(self.filter_object(map)),
            ValueKind::JsonText(parsed) => {
                let filtered = self.filter_item(key, &parsed);
                // Value serialization cannot fail in practice; degrade to the
                // placeholder rather than leak anything if it ever does.
                match serde_json::to_string(&filtered) {
                    Ok(text) => Value::String(text),
                    Err(_) => Value::String(self.policy.placeholder().to_string()),
                }
            }
            ValueKind::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|element| self.filter_item(key, element))
                    .collect(),
            ),
            ValueKind::Null | ValueKind::Bool | ValueKind::Number | ValueKind::Text => {
                value.clone()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
