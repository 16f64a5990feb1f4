//! Rotating file logger
//!
//! Appends one formatted line per call to a single file:
//!
//! ```text
//! [2024-05-01 13:37:00 ERROR src/server.rs:42] boom 5
//! ```
//!
//! Before every append the file's size and age are checked. When either
//! exceeds its threshold the file is deleted and recreated, so old content
//! is discarded rather than archived.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, AtomicU8, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use super::console::ConsoleLogger;
use super::traits::{Logger, SharedLogger};
use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::LogLevel;

/// `chrono` format of the timestamp at the start of every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// State guarded by the writer lock
struct LoggerState {
    path: PathBuf,
    file: Option<File>,
    /// Status-change time of the file at the last open, unix seconds
    opened_at: i64,
}

impl LoggerState {
    fn open(&mut self) -> LogResult<()> {
        let file = open_options()
            .open(&self.path)
            .map_err(|e| LogError::open(&self.path, e))?;
        let metadata = file.metadata();
        self.file = Some(file);
        self.opened_at = status_changed_at(&metadata.map_err(LogError::Stat)?);
        Ok(())
    }

    fn close(&mut self) {
        self.file = None;
    }

    fn reopen(&mut self) -> LogResult<()> {
        self.close();
        fs::remove_file(&self.path).map_err(|e| LogError::delete(&self.path, e))?;
        self.open()
    }

    fn file_size(&self) -> LogResult<u64> {
        let file = self.file.as_ref().ok_or(LogError::NotOpen)?;
        Ok(file.metadata().map_err(LogError::Stat)?.len())
    }

    fn append(&mut self, line: &str) -> LogResult<()> {
        let file = self.file.as_mut().ok_or(LogError::NotOpen)?;
        file.write_all(line.as_bytes()).map_err(LogError::Write)?;
        file.sync_data().map_err(LogError::Write)
    }
}

/// Leveled line logger writing to one rotating file
///
/// All methods take `&self`; share an instance between threads with
/// `Arc<LineLogger>`. One lock serializes the whole
/// size/age check, rotation, append and sync of each write, so lines are
/// never interleaved and a rotation is never observed half-done.
///
/// Lines below the threshold are dropped before the lock is taken.
///
/// Two `LineLogger`s pointed at the same path are not coordinated with each
/// other and will corrupt each other's output.
///
/// # Example
///
/// ```no_run
/// use linelog::{log_error, LineLogger};
///
/// let logger = LineLogger::new("/var/log/app.log");
/// logger.set_log_level("WARN");
/// logger.set_size_len(10 * 1024 * 1024);
/// logger.set_time_len(24 * 60 * 60);
/// if logger.open() {
///     log_error!(logger, "boom {}", 5);
/// }
/// ```
pub struct LineLogger {
    threshold: AtomicU8,
    max_age_secs: AtomicI64,
    max_size_bytes: AtomicI64,
    state: Mutex<LoggerState>,
    diagnostics: SharedLogger,
}

impl LineLogger {
    /// Create an unopened logger for `path`.
    ///
    /// The threshold starts at `LogLevel::None` (everything is written) and
    /// both rotation limits start at zero, which rotates on nearly every
    /// write. Set real limits before use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            threshold: AtomicU8::new(LogLevel::None.ordinal()),
            max_age_secs: AtomicI64::new(0),
            max_size_bytes: AtomicI64::new(0),
            state: Mutex::new(LoggerState {
                path: path.into(),
                file: None,
                opened_at: 0,
            }),
            diagnostics: Arc::new(ConsoleLogger::new()),
        }
    }

    /// Replace the sink that receives open-failure reports (stderr by default)
    pub fn with_diagnostics(mut self, diagnostics: SharedLogger) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Build a logger from `config` and open it
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        let logger = Self::new(&config.path);
        logger.apply_config(config);
        logger.try_open()?;
        Ok(logger)
    }

    /// Apply level and rotation limits from `config`; the path is not touched
    pub fn apply_config(&self, config: &LoggerConfig) {
        self.set_log_level(&config.level);
        self.set_size_len(config.max_size_bytes);
        self.set_time_len(config.max_age_secs);
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Set the file path used by the next `open` or rotation
    pub fn set_log_file(&self, path: impl Into<PathBuf>) {
        self.state.lock().path = path.into();
    }

    /// Set the age threshold in seconds
    pub fn set_time_len(&self, secs: i64) {
        self.max_age_secs.store(secs, Ordering::Relaxed);
    }

    /// Set the size threshold in bytes
    pub fn set_size_len(&self, bytes: i64) {
        self.max_size_bytes.store(bytes, Ordering::Relaxed);
    }

    /// Set the threshold by name.
    ///
    /// Names are case-sensitive. Unrecognized names, including lowercase
    /// spellings, select `ERROR`, so a typo filters more rather than less.
    pub fn set_log_level(&self, name: &str) {
        self.set_level(LogLevel::from_name(name));
    }

    /// Set the threshold directly
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Current threshold
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_ordinal(self.threshold.load(Ordering::Relaxed)).unwrap_or(LogLevel::Error)
    }

    pub fn time_len(&self) -> i64 {
        self.max_age_secs.load(Ordering::Relaxed)
    }

    pub fn size_len(&self) -> i64 {
        self.max_size_bytes.load(Ordering::Relaxed)
    }

    pub fn path(&self) -> PathBuf {
        self.state.lock().path.clone()
    }

    /// Whether a file handle is currently held
    pub fn is_open(&self) -> bool {
        self.state.lock().file.is_some()
    }

    /// Age baseline recorded at the last successful open, unix seconds
    pub fn opened_at(&self) -> i64 {
        self.state.lock().opened_at
    }

    /// Whether a line at `level` passes the threshold
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.log_level()
    }

    // ------------------------------------------------------------------
    // File lifecycle
    // ------------------------------------------------------------------

    /// Open the log file for append, creating it with mode `0644` if absent.
    ///
    /// If the file cannot be opened the error is reported to the diagnostics
    /// sink. A failure to stat the freshly opened file only yields `false`.
    pub fn open(&self) -> bool {
        match self.try_open() {
            Ok(()) => true,
            Err(err) => {
                self.report_open_failure(&err);
                false
            }
        }
    }

    pub fn try_open(&self) -> LogResult<()> {
        self.state.lock().open()
    }

    /// Release the file handle. Calling it again is a no-op.
    pub fn close(&self) {
        self.state.lock().close();
    }

    /// Close, delete the file and open a fresh one.
    ///
    /// The previous content is lost. If the delete fails the logger is left
    /// without a handle and writes fail until `open` or `reopen` succeeds.
    pub fn reopen(&self) -> bool {
        match self.try_reopen() {
            Ok(()) => true,
            Err(err) => {
                self.report_open_failure(&err);
                false
            }
        }
    }

    pub fn try_reopen(&self) -> LogResult<()> {
        self.state.lock().reopen()
    }

    fn report_open_failure(&self, err: &LogError) {
        if matches!(err, LogError::Open { .. }) {
            Logger::error(self.diagnostics.as_ref(), &err.to_string());
        }
    }

    /// Size of the open file in bytes, or 0 if it cannot be determined
    pub fn file_size(&self) -> i64 {
        self.try_file_size().unwrap_or(0)
    }

    /// Size of the open file, distinguishing a stat failure from an empty file
    pub fn try_file_size(&self) -> LogResult<i64> {
        let size = self.state.lock().file_size()?;
        Ok(i64::try_from(size).unwrap_or(i64::MAX))
    }

    // ------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------

    /// Write `message` at `level`, attributing it to the caller's location.
    ///
    /// Returns `true` when the line was appended or filtered out, `false`
    /// when the append failed.
    #[track_caller]
    pub fn write(&self, level: LogLevel, message: &str) -> bool {
        self.write_at(level, &call_site(Location::caller()), message)
    }

    /// Write `message` at `level` with an explicit call-site label
    pub fn write_at(&self, level: LogLevel, call_site: &str, message: &str) -> bool {
        self.try_write_at(level, call_site, message).is_ok()
    }

    /// Write with an explicit call-site label, reporting the failure cause.
    ///
    /// A failed rotation does not abort the write: the append is still
    /// attempted, and fails with `LogError::NotOpen` if the rotation left no
    /// handle behind.
    pub fn try_write_at(&self, level: LogLevel, call_site: &str, message: &str) -> LogResult<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let mut state = self.state.lock();

        let size = state.file_size().map(|s| i64::try_from(s).unwrap_or(i64::MAX)).unwrap_or(0);
        let now = Local::now().timestamp();
        if size > self.size_len() || now - state.opened_at > self.time_len() {
            let _ = state.reopen();
        }

        let line = format_line(&Local::now(), level, call_site, message);
        state.append(&line)
    }

    /// Format `args` and write them at `level`
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> bool {
        if !self.enabled(level) {
            return true;
        }
        self.write(level, &args.to_string())
    }

    #[track_caller]
    pub fn log_info(&self, args: fmt::Arguments<'_>) -> bool {
        self.log(LogLevel::Info, args)
    }

    #[track_caller]
    pub fn log_debug(&self, args: fmt::Arguments<'_>) -> bool {
        self.log(LogLevel::Debug, args)
    }

    #[track_caller]
    pub fn log_warn(&self, args: fmt::Arguments<'_>) -> bool {
        self.log(LogLevel::Warn, args)
    }

    #[track_caller]
    pub fn log_error(&self, args: fmt::Arguments<'_>) -> bool {
        self.log(LogLevel::Error, args)
    }
}

impl std::fmt::Debug for LineLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LineLogger")
            .field("path", &state.path)
            .field("open", &state.file.is_some())
            .field("opened_at", &state.opened_at)
            .field("level", &self.log_level())
            .field("max_size_bytes", &self.size_len())
            .field("max_age_secs", &self.time_len())
            .finish()
    }
}

/// Render one log line, including the trailing newline
pub fn format_line(time: &DateTime<Local>, level: LogLevel, call_site: &str, message: &str) -> String {
    format!(
        "[{} {} {}] {}\n",
        time.format(TIMESTAMP_FORMAT),
        level,
        call_site,
        message
    )
}

/// `file:line` label for a source location
pub fn call_site(location: &Location<'_>) -> String {
    format!("{}:{}", location.file(), location.line())
}

fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options
}

#[cfg(unix)]
fn status_changed_at(metadata: &fs::Metadata) -> i64 {
    use std::os::unix::fs::MetadataExt;
    metadata.ctime()
}

#[cfg(not(unix))]
fn status_changed_at(metadata: &fs::Metadata) -> i64 {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .ok()
        .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or_else(|| Local::now().timestamp())
}

/// Format and write at Info level, attributing the line to the macro call site
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_error(format_args!($($arg)*))
    };
}
