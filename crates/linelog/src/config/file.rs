//! File-backed logger settings (YAML or JSON)
//!
//! User-level settings live at `~/.config/linelog/config.yaml` (platform
//! config dir). Environment variables override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;

/// Default size threshold: 10 MiB
pub const DEFAULT_MAX_SIZE_BYTES: i64 = 10 * 1024 * 1024;

/// Default age threshold: one day
pub const DEFAULT_MAX_AGE_SECS: i64 = 24 * 60 * 60;

const ENV_FILE: &str = "LINELOG_FILE";
const ENV_LEVEL: &str = "LINELOG_LEVEL";
const ENV_MAX_SIZE: &str = "LINELOG_MAX_SIZE";
const ENV_MAX_AGE: &str = "LINELOG_MAX_AGE";

/// Settings for a single `LineLogger`
///
/// ```yaml
/// path: /var/log/app.log
/// level: WARN
/// max_size_bytes: 1048576
/// max_age_secs: 3600
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file path
    pub path: PathBuf,

    /// Threshold level name; unknown names act as `ERROR`
    pub level: String,

    /// Rotate once the file grows beyond this many bytes
    pub max_size_bytes: i64,

    /// Rotate once the file is older than this many seconds
    pub max_age_secs: i64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: Self::default_log_path(),
            level: "INFO".to_string(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }
}

impl LoggerConfig {
    /// Create a config for the given log file with default thresholds
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the threshold level name
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the size threshold
    pub fn with_max_size(mut self, bytes: i64) -> Self {
        self.max_size_bytes = bytes;
        self
    }

    /// Set the age threshold
    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age_secs = secs;
        self
    }

    /// `<temp dir>/linelog.log`
    pub fn default_log_path() -> PathBuf {
        std::env::temp_dir().join("linelog.log")
    }

    /// User-level config file (`<config dir>/linelog/config.yaml`)
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("linelog").join("config.yaml")
    }

    /// Load settings from a file.
    ///
    /// Files ending in `.json` are read as JSON, anything else as YAML.
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save settings to a file, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `LINELOG_FILE`, `LINELOG_LEVEL`, `LINELOG_MAX_SIZE` and
    /// `LINELOG_MAX_AGE` on top of the current values
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_FILE).filter(|v| !v.is_empty()) {
            self.path = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = level;
        }
        // Unparsable numbers keep the previous value
        if let Some(bytes) = lookup(ENV_MAX_SIZE).and_then(|v| v.trim().parse().ok()) {
            self.max_size_bytes = bytes;
        }
        if let Some(secs) = lookup(ENV_MAX_AGE).and_then(|v| v.trim().parse().ok()) {
            self.max_age_secs = secs;
        }
        self
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map(|ext| ext == "json").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "INFO");
        assert_eq!(config.max_size_bytes, DEFAULT_MAX_SIZE_BYTES);
        assert_eq!(config.max_age_secs, DEFAULT_MAX_AGE_SECS);
        assert!(config.path.ends_with("linelog.log"));
        assert!(LoggerConfig::user_config_path().ends_with("linelog/config.yaml"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = LoggerConfig::new("/var/log/app.log")
            .with_level("WARN")
            .with_max_size(4096)
            .with_max_age(60);

        config.save(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("level: WARN"));
        assert!(content.contains("max_size_bytes: 4096"));

        assert_eq!(LoggerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_json_and_partial_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"level": "DEBUG", "max_age_secs": 5}"#).unwrap();

        let config = LoggerConfig::load(&path).unwrap();
        assert_eq!(config.level, "DEBUG");
        assert_eq!(config.max_age_secs, 5);
        assert_eq!(config.max_size_bytes, DEFAULT_MAX_SIZE_BYTES);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "max_size_bytes: [not, a, number]").unwrap();

        assert!(matches!(LoggerConfig::load(&path), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("LINELOG_FILE", "/tmp/override.log"),
            ("LINELOG_LEVEL", "ERROR"),
            ("LINELOG_MAX_SIZE", " 2048 "),
            ("LINELOG_MAX_AGE", "soon"),
        ]);

        let config = LoggerConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.path, PathBuf::from("/tmp/override.log"));
        assert_eq!(config.level, "ERROR");
        assert_eq!(config.max_size_bytes, 2048);
        assert_eq!(config.max_age_secs, DEFAULT_MAX_AGE_SECS);
    }
}
