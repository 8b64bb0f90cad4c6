//! Redaction policy: which key names are sensitive.
//!
//! This module provides:
//!
//! - **The matcher** ([`RedactionPolicy`]): an immutable blacklist/whitelist
//!   pair resolved once at construction, queried per key during filtering.
//!
//! - **The defaults** ([`DEFAULT_BLACKLIST`], [`PLACEHOLDER`]): the built-in
//!   sensitive-fragment list and the sentinel substituted for redacted values.
//!
//! Matching is case-insensitive substring containment of a fragment within
//! the key, not exact match or regex. The policy never inspects values; value
//! shapes are the concern of `crate::filter`.
//!
//! # Example
//!
//! ```rust
//! use scrublog::RedactionPolicy;
//!
//! let policy = RedactionPolicy::new(&["internal_id"], &[], &["public_token"]);
//! assert!(policy.is_sensitive("Authorization"));
//! assert!(policy.is_sensitive("user_internal_id"));
//! assert!(!policy.is_sensitive("public_token")); // whitelist wins
//! ```

mod blacklist;

pub use blacklist::{DEFAULT_BLACKLIST, PLACEHOLDER, RedactionPolicy};
