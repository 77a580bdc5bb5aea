//! Server settings.
//!
//! Settings come from an optional TOML file named by `OUTREACH_CONFIG`. Every
//! key is optional; anything missing falls back to the defaults below.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "OUTREACH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub json_limit_bytes: usize,
    /// Largest sheet accepted by the CSV upload route.
    pub upload_limit_bytes: usize,
    pub log_level: String,
    pub job_channel_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("outreach.sqlite"),
            json_limit_bytes: 10 * 1024 * 1024, // 10 MB
            upload_limit_bytes: 20 * 1024 * 1024,
            log_level: "info".to_string(),
            job_channel_capacity: 100,
        }
    }
}

impl Settings {
    /// Loads the file named by `OUTREACH_CONFIG`, or the defaults when unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Settings::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
