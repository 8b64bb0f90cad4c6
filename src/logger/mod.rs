//! Record assembly and emission.
//!
//! This module provides the logging front end:
//!
//! - **`level`**: [`LogLevel`] ordering and fail-closed threshold resolution
//! - **`origin`**: injected call-origin labelling ([`OriginProvider`])
//! - **`sink`**: output routing ([`LogSink`], [`StdStreams`], [`MemorySink`])
//! - **[`Logger`]**: combines the redaction filter with level, timestamp,
//!   and origin into one JSON record per call
//!
//! Redaction semantics live in `crate::filter`; this module only decides
//! whether to emit and what envelope to wrap the redacted trees in.

mod level;
mod origin;
mod sink;

use std::env;
use std::panic::Location;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::filter::LoggerFilter;
use crate::policy::RedactionPolicy;

pub use level::{LogLevel, ParseLevelError};
pub use origin::{CallerLocation, Origin, OriginProvider, StaticOrigin};
pub use sink::{LogSink, MemorySink, StdStreams};

// =============================================================================
// LoggerOptions - construction-time configuration
// =============================================================================

/// Configuration resolved once when a [`Logger`] is built.
///
/// ```rust
/// use scrublog::{LoggerOptions, LogLevel};
///
/// let options = LoggerOptions::default()
///     .with_include_blacklist(["device_id"])
///     .with_whitelist(["public_token"])
///     .with_log_level(LogLevel::Info);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggerOptions {
    include_blacklist: Vec<String>,
    exclude_blacklist: Vec<String>,
    whitelist: Vec<String>,
    log_level: Option<LogLevel>,
}

impl LoggerOptions {
    /// Fragments to add to the default blacklist.
    #[must_use]
    pub fn with_include_blacklist<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_blacklist
            .extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Default-blacklist fragments to remove.
    #[must_use]
    pub fn with_exclude_blacklist<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_blacklist
            .extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Fragments exempted from redaction even when blacklisted.
    #[must_use]
    pub fn with_whitelist<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Explicit emission threshold, overriding the `LOG_LEVEL` environment
    /// variable.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }
}

// =============================================================================
// The emitted record
// =============================================================================

/// Serialized field order is the record contract; struct order is the wire
/// order.
#[derive(Serialize)]
struct LogRecord {
    context: Map<String, Value>,
    level: &'static str,
    datetime: String,
    message: String,
    extra: Map<String, Value>,
}

// =============================================================================
// Logger
// =============================================================================

/// Structured JSON logger with automatic redaction.
///
/// A logger owns an optional `context` payload attached (redacted) to every
/// record, an immutable severity threshold, and the filter built from its
/// options. All state is read-only after construction, so a logger can be
/// shared freely across threads.
///
/// The threshold is resolved once at construction: an explicit
/// [`LoggerOptions::with_log_level`] wins, otherwise the `LOG_LEVEL`
/// environment variable is consulted a single time (unset means `debug`; an
/// unrecognized value silences the instance entirely).
pub struct Logger {
    context: Option<Value>,
    threshold: Option<LogLevel>,
    filter: LoggerFilter,
    origin_provider: Box<dyn OriginProvider>,
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Builds a logger with the default origin provider and sink.
    #[must_use]
    pub fn new(context: Option<Value>, options: LoggerOptions) -> Self {
        let policy = RedactionPolicy::new(
            &options.include_blacklist,
            &options.exclude_blacklist,
            &options.whitelist,
        );
        let threshold = level::resolve_threshold(
            options.log_level,
            env::var(level::LOG_LEVEL_VAR).ok().as_deref(),
        );
        Self {
            context,
            threshold,
            filter: LoggerFilter::new(policy),
            origin_provider: Box::new(CallerLocation),
            sink: Box::new(StdStreams),
        }
    }

    /// Replaces the output sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the origin provider.
    #[must_use]
    pub fn with_origin_provider(mut self, provider: impl OriginProvider + 'static) -> Self {
        self.origin_provider = Box::new(provider);
        self
    }

    /// The filter this logger redacts with.
    #[must_use]
    pub fn filter(&self) -> &LoggerFilter {
        &self.filter
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message, None::<&Value>, Location::caller());
    }

    #[track_caller]
    pub fn debug_with<T: Serialize + ?Sized>(&self, message: &str, extra: &T) {
        self.emit(LogLevel::Debug, message, Some(extra), Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message, None::<&Value>, Location::caller());
    }

    #[track_caller]
    pub fn info_with<T: Serialize + ?Sized>(&self, message: &str, extra: &T) {
        self.emit(LogLevel::Info, message, Some(extra), Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message, None::<&Value>, Location::caller());
    }

    #[track_caller]
    pub fn warn_with<T: Serialize + ?Sized>(&self, message: &str, extra: &T) {
        self.emit(LogLevel::Warn, message, Some(extra), Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message, None::<&Value>, Location::caller());
    }

    #[track_caller]
    pub fn error_with<T: Serialize + ?Sized>(&self, message: &str, extra: &T) {
        self.emit(LogLevel::Error, message, Some(extra), Location::caller());
    }

    /// Emits at an arbitrary level.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str) {
        self.emit(level, message, None::<&Value>, Location::caller());
    }

    /// Emits at an arbitrary level with an extra payload.
    #[track_caller]
    pub fn log_with<T: Serialize + ?Sized>(&self, level: LogLevel, message: &str, extra: &T) {
        self.emit(level, message, Some(extra), Location::caller());
    }

    fn emit<T: Serialize + ?Sized>(
        &self,
        level: LogLevel,
        message: &str,
        extra: Option<&T>,
        caller: &'static Location<'static>,
    ) {
        if !self.should_log(level) {
            return;
        }

        let origin = self.origin_provider.resolve(caller);
        let record = LogRecord {
            context: self.filter.process(self.context.as_ref()),
            level: level.as_str(),
            datetime: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: format!("{origin}: {message}"),
            extra: self.filter.process(extra),
        };

        // A record that cannot be serialized is dropped, never partially
        // emitted.
        if let Ok(line) = serde_json::to_string(&record) {
            self.sink.write(level, &line);
        }
    }

    fn should_log(&self, level: LogLevel) -> bool {
        self.threshold.is_some_and(|threshold| level >= threshold)
    }
}

// =============================================================================
// Tests
// =============================================================================
