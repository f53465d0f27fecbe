//! TOML defaults for the command-line front end.
//!
//! ```toml
//! [string]
//! length = 24
//! min_special = 2
//! override_special = "!#%"
//!
//! [id]
//! byte_length = 8
//!
//! [output]
//! json = true
//! log_level = "info"
//! ```

use crate::charset::StringOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub string: StringOptions,
    pub id: IdDefaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdDefaults {
    pub byte_length: usize,
    pub prefix: Option<String>,
}

impl Default for IdDefaults {
    fn default() -> Self {
        IdDefaults {
            byte_length: 8,
            prefix: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// No path means defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Config::default()),
        }
    }
}
