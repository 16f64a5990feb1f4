//! Logger trait definition

use std::sync::Arc;

/// Sink for diagnostics about the logger itself
///
/// Implementations:
/// - `NoOpLogger`: Silent sink for testing
/// - `ConsoleLogger`: Writes to stderr
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records every message it receives, tagged with its level
    #[derive(Debug, Default)]
    pub(crate) struct CapturingLogger {
        pub(crate) messages: Mutex<Vec<(&'static str, String)>>,
    }

    impl Logger for CapturingLogger {
        fn debug(&self, message: &str) {
            self.messages.lock().push(("debug", message.to_string()));
        }

        fn info(&self, message: &str) {
            self.messages.lock().push(("info", message.to_string()));
        }

        fn warn(&self, message: &str) {
            self.messages.lock().push(("warn", message.to_string()));
        }

        fn error(&self, message: &str) {
            self.messages.lock().push(("error", message.to_string()));
        }
    }
}
