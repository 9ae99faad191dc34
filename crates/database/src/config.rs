//! Application configuration.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error when decoding app config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application configuration, read from YAML.
///
/// ```yaml
/// query_timeout: 500      # milliseconds; omit for no timeout
/// access_log: access.log
/// error_log: error.log
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Per-query timeout in milliseconds.
    pub query_timeout: Option<u64>,
    /// Destination of log events below ERROR.
    pub access_log: PathBuf,
    /// Destination of ERROR log events.
    pub error_log: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_timeout: None,
            access_log: PathBuf::from("access.log"),
            error_log: PathBuf::from("error.log"),
        }
    }
}

impl Config {
    /// Decodes a configuration from YAML. Missing keys take their defaults.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Reads and decodes a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;
        Self::from_reader(file)
    }

    /// Returns the query timeout, if one is configured. Zero means no timeout.
    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Sets the query timeout in milliseconds.
    pub fn with_query_timeout(mut self, millis: u64) -> Self {
        self.query_timeout = Some(millis);
        self
    }
}
