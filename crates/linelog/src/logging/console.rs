//! Console diagnostics sink

use super::traits::Logger;

/// A logger that writes every message to stderr
///
/// This is the default diagnostics sink of `LineLogger`: the only message it
/// ever receives there is the report of a failed initial open.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[linelog]".to_string(),
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn emit(&self, level: &str, message: &str) {
        eprintln!("{} {}: {}", self.prefix, level, message);
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit("DEBUG", message);
    }

    fn info(&self, message: &str) {
        self.emit("INFO", message);
    }

    fn warn(&self, message: &str) {
        self.emit("WARN", message);
    }

    fn error(&self, message: &str) {
        self.emit("ERROR", message);
    }
}
