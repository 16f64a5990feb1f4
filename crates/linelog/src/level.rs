//! Severity levels
//!
//! Levels compare by their ordinal value. The ordering is
//! `None < Info < Debug < Warn < Error`, so a `DEBUG` threshold filters out
//! `INFO` lines but keeps `DEBUG`, `WARN` and `ERROR`. This differs from the
//! usual `DEBUG < INFO` convention and is kept for compatibility with
//! existing log consumers and configurations.

use std::str::FromStr;

use crate::error::LogError;

/// Log levels, ordered by ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// No threshold; every line is written. Renders as `UNKNOWN`.
    #[default]
    None = 0,
    Info = 1,
    Debug = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Map a level name to a level.
    ///
    /// Matching is case-sensitive. Any name other than `INFO`, `DEBUG`,
    /// `WARN` or `ERROR` (including `"info"`, `"NONE"` and `""`) resolves to
    /// [`LogLevel::Error`], the strictest filter. Use [`str::parse`] when an
    /// unknown name should be reported instead.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(LogLevel::Error)
    }

    /// Look up a level by its ordinal value
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(LogLevel::None),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            3 => Some(LogLevel::Warn),
            4 => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Ordinal value used for threshold comparison
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display name written into log lines
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(LogError::UnknownLevel(other.to_string())),
        }
    }
}

/// Display name for a raw ordinal; unmapped values render as `UNKNOWN`
pub fn level_name(ordinal: u8) -> &'static str {
    LogLevel::from_ordinal(ordinal)
        .map(LogLevel::name)
        .unwrap_or("UNKNOWN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_order() {
        assert!(LogLevel::Info > LogLevel::None);
        assert!(LogLevel::Debug > LogLevel::Info);
        assert!(LogLevel::Warn > LogLevel::Debug);
        assert!(LogLevel::Error > LogLevel::Warn);
        assert_eq!(LogLevel::Debug.ordinal(), 2);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(LogLevel::from_name("INFO"), LogLevel::Info);
        assert_eq!(LogLevel::from_name("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_name("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_name("ERROR"), LogLevel::Error);

        // Unknown names fall back to the strictest threshold
        assert_eq!(LogLevel::from_name("info"), LogLevel::Error);
        assert_eq!(LogLevel::from_name("NONE"), LogLevel::Error);
        assert_eq!(LogLevel::from_name(""), LogLevel::Error);
        assert_eq!(LogLevel::from_name("TRACE"), LogLevel::Error);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!(matches!(
            "warn".parse::<LogLevel>(),
            Err(LogError::UnknownLevel(name)) if name == "warn"
        ));
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Error.name(), "ERROR");
        assert_eq!(LogLevel::None.name(), "UNKNOWN");

        assert_eq!(level_name(3), "WARN");
        assert_eq!(level_name(0), "UNKNOWN");
        assert_eq!(level_name(42), "UNKNOWN");
    }

    #[test]
    fn test_ordinal_round_trip() {
        for ordinal in 0..=4 {
            let level = LogLevel::from_ordinal(ordinal).unwrap();
            assert_eq!(level.ordinal(), ordinal);
        }
        assert_eq!(LogLevel::from_ordinal(5), None);
    }
}
