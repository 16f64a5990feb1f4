//! LineLog
//!
//! A file-backed line logger. Each accepted message becomes one line:
//!
//! ```text
//! [YYYY-MM-DD HH:MM:SS LEVEL file:line] message
//! ```
//!
//! The file is deleted and recreated (not archived) once it grows past a
//! size limit or outlives an age limit. One lock per logger serializes
//! rotation and appends, and every line is synced before the call returns.
//!
//! ```rust,no_run
//! use linelog::{log_warn, LineLogger, LoggerConfig};
//!
//! let config = LoggerConfig::load(LoggerConfig::user_config_path())?
//!     .with_env_overrides();
//! let logger = LineLogger::from_config(&config)?;
//!
//! log_warn!(logger, "disk at {}%", 91);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod level;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, LoggerConfig};
pub use error::{LogError, LogResult};
pub use level::{level_name, LogLevel};
pub use logging::{
    global, init_global,
    ConsoleLogger, LineLogger, Logger, NoOpLogger, SharedLogger,
};
