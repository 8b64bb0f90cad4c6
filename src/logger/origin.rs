//! Call-origin labelling.
//!
//! The origin is the human-readable call-site label prefixed to every
//! message. It is resolved through an injected [`OriginProvider`] rather than
//! ambient stack inspection, which keeps the logger decoupled from any
//! particular introspection mechanism: the default provider renders the
//! `#[track_caller]` location, and callers who want semantic labels pin one
//! with [`StaticOrigin`].

use std::fmt;
use std::panic::Location;

// =============================================================================
// Origin - the resolved call-site label
// =============================================================================

/// A resolved call-site label, in decreasing order of specificity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Renders as `Type.method()`.
    Method {
        type_name: String,
        method: String,
    },
    /// Renders as `function()`.
    Function(String),
    /// Renders as the bare path, e.g. `src/billing.rs:42`.
    File(String),
    /// Renders as `unknown`; the last resort.
    Unknown,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method { type_name, method } => write!(f, "{type_name}.{method}()"),
            Self::Function(name) => write!(f, "{name}()"),
            Self::File(path) => f.write_str(path),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

// =============================================================================
// OriginProvider - injected resolution capability
// =============================================================================

/// Resolves the origin label for one emission.
///
/// `caller` is the `#[track_caller]` location of the public log call; a
/// provider is free to ignore it.
pub trait OriginProvider: Send + Sync {
    fn resolve(&self, caller: &'static Location<'static>) -> Origin;
}

/// Default provider: the call site as `file:line`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallerLocation;

impl OriginProvider for CallerLocation {
    fn resolve(&self, caller: &'static Location<'static>) -> Origin {
        Origin::File(format!("{}:{}", caller.file(), caller.line()))
    }
}

/// Provider pinned to one fixed label, ignoring the call site.
#[derive(Clone, Debug)]
pub struct StaticOrigin(Origin);

impl StaticOrigin {
    /// A `Type.method()` label.
    #[must_use]
    pub fn method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self(Origin::Method {
            type_name: type_name.into(),
            method: method.into(),
        })
    }

    /// A `function()` label.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self(Origin::Function(name.into()))
    }

    /// The `unknown` label.
    #[must_use]
    pub fn unknown() -> Self {
        Self(Origin::Unknown)
    }
}

impl OriginProvider for StaticOrigin {
    fn resolve(&self, _caller: &'static Location<'static>) -> Origin {
        self.0.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================
