//! Line logger, diagnostics sinks and the process-wide instance

mod traits;
mod noop;
mod console;
pub mod line_logger;
pub mod global;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

pub use line_logger::{LineLogger, format_line, call_site, TIMESTAMP_FORMAT};
pub use global::{init_global, global};
