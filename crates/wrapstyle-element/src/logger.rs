//! Logging capability handed to the formatter.
//!
//! The formatter never reaches for a global logger. Hosts pass a
//! [`RenderLogger`]; [`TracingLogger`] forwards to `tracing` and
//! [`RecordingLogger`] keeps messages in memory for inspection.

use std::sync::Mutex;

use tracing::Level;

/// Receives diagnostics produced while building an element.
pub trait RenderLogger: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    fn warning(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

/// Forwards messages to `tracing` under the `wrapstyle` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RenderLogger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: "wrapstyle", "{}", message);
        } else if level == Level::WARN {
            tracing::warn!(target: "wrapstyle", "{}", message);
        } else if level == Level::INFO {
            tracing::info!(target: "wrapstyle", "{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "wrapstyle", "{}", message);
        } else {
            tracing::trace!(target: "wrapstyle", "{}", message);
        }
    }
}

/// A logged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records so far, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Records at exactly `level`.
    pub fn at(&self, level: Level) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        // A panic while holding the lock cannot leave the Vec inconsistent.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RenderLogger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_logger_filters_by_level() {
        let logger = RecordingLogger::new();
        logger.warning("missing config");
        logger.error("bad color");
        logger.debug("picked record color");

        assert_eq!(logger.records().len(), 3);
        let errors = logger.at(Level::ERROR);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "bad color");
    }

    #[test]
    fn test_tracing_logger_does_not_panic_without_subscriber() {
        TracingLogger.warning("no subscriber installed");
        TracingLogger.log(Level::TRACE, "trace");
    }
}
