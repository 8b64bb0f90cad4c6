//! Structured JSON logging with automatic key-driven redaction.
//!
//! This crate separates:
//! - **Policy**: which key names are sensitive (blacklist/whitelist fragments).
//! - **Filtering**: the recursive tree-walk that replaces sensitive subtrees
//!   with a placeholder before anything is serialized for output.
//! - **Emission**: severity gating, call-origin labelling, and the one-line
//!   JSON record written to a sink.
//!
//! What this crate does:
//! - redacts values whose key contains a blacklisted fragment (case-insensitive
//!   substring match), with a whitelist override
//! - re-parses and filters JSON-encoded string payloads
//! - reduces error-shaped values to safe fields (no stack traces)
//! - emits `{context, level, datetime, message, extra}` records, one per line
//!
//! What it does not do:
//! - general-purpose serialization
//! - derive-macro or type-level redaction; sensitivity is decided per key at
//!   runtime, over dynamic payloads
//!
//! # Example
//!
//! ```rust
//! use scrublog::{Logger, LoggerOptions, LogLevel};
//! use serde_json::json;
//!
//! let logger = Logger::new(
//!     Some(json!({"service": "billing"})),
//!     LoggerOptions::default().with_log_level(LogLevel::Info),
//! );
//! logger.info_with("charge created", &json!({"card_token": "tok_123"}));
//! // emitted extra: {"card_token": "*sensitive*"}
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod filter;
pub mod logger;
pub mod policy;

// Re-exports from policy module
pub use policy::{DEFAULT_BLACKLIST, PLACEHOLDER, RedactionPolicy};
// Re-exports from filter module
pub use filter::{BACKREF_MARKER, LoggerFilter, error_value};
// Re-exports from logger module
pub use logger::{
    CallerLocation, LogLevel, LogSink, Logger, LoggerOptions, MemorySink, Origin, OriginProvider,
    ParseLevelError, StaticOrigin, StdStreams,
};
