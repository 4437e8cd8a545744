//! Core configuration file.
//!
//! # Responsibility
//! - Load session settings (logging, data file, booking window policy).
//! - Fill missing fields with defaults and normalize values.
//!
//! # Invariants
//! - A missing config file yields defaults; a malformed one is an error.
//! - `log_level` is always one of `trace|debug|info|warn|error` after
//!   `validate()`.

use crate::logging::{default_log_level, normalize_level};
use crate::store::capacity::WindowPolicy;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "data/restobook.json";

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidLogLevel(String),
    InvalidPolicy(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Json(err) => write!(f, "invalid config file: {err}"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::InvalidPolicy(message) => write!(f, "invalid window policy: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidLogLevel(_) | Self::InvalidPolicy(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Session settings for the restaurant book core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// `trace|debug|info|warn|error`; defaults by build mode.
    pub log_level: String,
    /// Absolute log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// Restaurant book JSON file.
    pub data_file: PathBuf,
    /// Which bookings count as concurrent for capacity checks.
    pub window_policy: WindowPolicy,
    /// Seed sample data when `data_file` does not exist.
    pub seed_sample_data: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            window_policy: WindowPolicy::default(),
            seed_sample_data: true,
        }
    }
}

impl CoreConfig {
    /// Normalizes the log level and checks policy parameters.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::InvalidLogLevel)?
            .to_string();
        if let WindowPolicy::FixedSeating { minutes: 0 } = self.window_policy {
            return Err(ConfigError::InvalidPolicy(
                "fixed seating length must be at least 1 minute".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Loads and validates `path`; a missing file yields defaults.
pub fn load_config(path: &Path) -> Result<CoreConfig, ConfigError> {
    let config = match std::fs::read_to_string(path) {
        Ok(text) => serde_json::from_str::<CoreConfig>(&text)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => CoreConfig::default(),
        Err(err) => return Err(err.into()),
    };
    let config = config.validate()?;
    info!(
        "event=config_loaded module=config status=ok level={} policy={:?}",
        config.log_level, config.window_policy
    );
    Ok(config)
}
