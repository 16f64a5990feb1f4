//! Logger configuration
//!
//! Settings can come from:
//! - Direct setter calls on `LineLogger`
//! - A YAML (or JSON) file, see `LoggerConfig::load`
//! - `LINELOG_*` environment variables layered on top

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{LoggerConfig, DEFAULT_MAX_AGE_SECS, DEFAULT_MAX_SIZE_BYTES};
