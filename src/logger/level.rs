//! Severity levels and threshold resolution.

use std::fmt;
use std::str::FromStr;

/// Environment variable consulted (once, at construction) for the threshold.
pub(crate) const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

// =============================================================================
// LogLevel - severity ordering
// =============================================================================

/// Record severity, ordered `Debug < Info < Warn < Error`.
///
/// A record is emitted iff its level is `>=` the instance threshold, so a
/// `Warn` threshold passes `Warn` and `Error` records only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The lowercase name used in emitted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLevelError;

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized log level")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Case-insensitive parse of the four level names.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError),
        }
    }
}

// =============================================================================
// Threshold resolution
// =============================================================================

/// Resolves the emission threshold, once, at logger construction.
///
/// An explicit option always wins. Otherwise the environment value applies:
/// absent means everything is emitted (`Debug` threshold), while a present
/// but unrecognized value yields no threshold at all, so the instance never
/// emits. Misconfiguration fails closed rather than defaulting to verbose.
pub(crate) fn resolve_threshold(
    explicit: Option<LogLevel>,
    env_value: Option<&str>,
) -> Option<LogLevel> {
    if explicit.is_some() {
        return explicit;
    }
    match env_value {
        None => Some(LogLevel::Debug),
        Some(raw) => raw.parse().ok(),
    }
}

// =============================================================================
// Tests
// =============================================================================
