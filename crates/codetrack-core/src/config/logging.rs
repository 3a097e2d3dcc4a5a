//! Logging configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (`LOG_LEVEL`): `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    /// Upper-case names are accepted.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory holding the application log file (`LOG_DIR`).
    #[serde(default = "default_dir")]
    pub dir: String,
    /// File name of the application log inside `dir`.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl LoggingConfig {
    /// Full path of the application log file.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.file_name)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            dir: default_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_dir() -> String {
    "logs".to_string()
}

fn default_file_name() -> String {
    "app.log".to_string()
}
