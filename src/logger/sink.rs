//! Output sinks for emitted records.
//!
//! A sink receives the already-serialized record line together with its
//! severity and decides where it goes. Sinks are infallible by contract:
//! logging must never surface errors to the caller, so a sink that cannot
//! write simply drops the line.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::level::LogLevel;

// =============================================================================
// LogSink - where record lines go
// =============================================================================

/// Consumes one serialized record line per emission.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, line: &str);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn write(&self, level: LogLevel, line: &str) {
        (**self).write(level, line);
    }
}

/// Default sink: debug/info to stdout, warn/error to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdStreams;

impl StdStreams {
    /// Routes one line to the stream its severity selects.
    fn route<O: Write, E: Write>(
        level: LogLevel,
        line: &str,
        stdout: &mut O,
        stderr: &mut E,
    ) -> io::Result<()> {
        match level {
            LogLevel::Debug | LogLevel::Info => writeln!(stdout, "{line}"),
            LogLevel::Warn | LogLevel::Error => writeln!(stderr, "{line}"),
        }
    }
}

impl LogSink for StdStreams {
    fn write(&self, level: LogLevel, line: &str) {
        // A stream that cannot be written to loses the line.
        let _ = Self::route(level, line, &mut io::stdout().lock(), &mut io::stderr().lock());
    }
}

/// Capturing sink for assertions in tests.
///
/// Share it with a logger through an `Arc` and inspect what was emitted:
///
/// ```rust
/// use std::sync::Arc;
/// use scrublog::{LogLevel, Logger, LoggerOptions, MemorySink};
///
/// let sink = Arc::new(MemorySink::default());
/// let options = LoggerOptions::default().with_log_level(LogLevel::Debug);
/// let logger = Logger::new(None, options).with_sink(Arc::clone(&sink));
/// logger.info("ready");
/// assert_eq!(sink.take().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    /// Drains and returns everything captured so far.
    pub fn take(&self) -> Vec<(LogLevel, String)> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(_) => Vec::new(),
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_streams_routes_debug_and_info_to_stdout() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            StdStreams::route(level, level.as_str(), &mut stdout, &mut stderr).unwrap();
        }
        assert_eq!(String::from_utf8(stdout).unwrap(), "debug\ninfo\n");
        assert_eq!(String::from_utf8(stderr).unwrap(), "warn\nerror\n");
    }

    #[test]
    fn std_streams_emits_one_line_per_record() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        StdStreams::route(LogLevel::Info, "{\"level\":\"info\"}", &mut stdout, &mut stderr)
            .unwrap();
        assert_eq!(String::from_utf8(stdout).unwrap(), "{\"level\":\"info\"}\n");
        assert!(stderr.is_empty());
    }

    #[test]
    fn memory_sink_take_drains_captured_lines() {
        let sink = MemorySink::default();
        sink.write(LogLevel::Warn, "first");
        sink.write(LogLevel::Error, "second");
        let lines = sink.take();
        assert_eq!(
            lines,
            vec![
                (LogLevel::Warn, "first".to_string()),
                (LogLevel::Error, "second".to_string())
            ]
        );
        assert!(sink.take().is_empty());
    }
}
