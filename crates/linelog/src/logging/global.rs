//! Process-wide logger
//!
//! Install one `LineLogger` at startup with [`init_global`], then log from
//! anywhere with the `*_log!` macros.

use std::fmt;

use once_cell::sync::OnceCell;

use super::line_logger::LineLogger;
use crate::level::LogLevel;

/// Global logger instance
static GLOBAL: OnceCell<LineLogger> = OnceCell::new();

/// Install the process-wide logger. Returns `false` if one is already set.
pub fn init_global(logger: LineLogger) -> bool {
    GLOBAL.set(logger).is_ok()
}

/// The process-wide logger, if installed
pub fn global() -> Option<&'static LineLogger> {
    GLOBAL.get()
}

/// Write to the global logger; `false` when none is installed
#[track_caller]
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) -> bool {
    match global() {
        Some(logger) => logger.log(level, args),
        None => false,
    }
}

/// Convenience macros for logging to the global logger
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logging::global::log($crate::LogLevel::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::global::log($crate::LogLevel::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::global::log($crate::LogLevel::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::global::log($crate::LogLevel::Error, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    use crate::logging::NoOpLogger;

    // The only test in the crate that touches the global logger
    #[test]
    fn test_global_logger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("global.log");

        let logger = LineLogger::new(&path).with_diagnostics(Arc::new(NoOpLogger));
        logger.set_log_level("WARN");
        logger.set_size_len(1024 * 1024);
        logger.set_time_len(60 * 60);
        assert!(logger.open());

        assert!(global().is_none());
        assert!(!error_log!("dropped, nothing installed"));

        assert!(init_global(logger));
        assert!(!init_global(LineLogger::new(dir.path().join("other.log"))));

        assert!(info_log!("filtered {}", 1));
        assert!(debug_log!("filtered {}", 2));
        assert!(warn_log!("kept {}", 3));
        assert!(error_log!("kept {}", 4));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" WARN "));
        assert!(lines[0].ends_with("] kept 3"));
        assert!(lines[1].contains(&format!("{}:", file!())));
        assert!(lines[1].ends_with("] kept 4"));
    }
}
