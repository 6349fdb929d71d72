use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MIN_NAME_LENGTH: usize = 2;
pub const DEFAULT_MIN_MESSAGE_LENGTH: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Minimum lengths enforced by the field checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    pub min_name_length: usize,
    pub min_message_length: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        GuardConfig {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            min_message_length: DEFAULT_MIN_MESSAGE_LENGTH,
        }
    }
}

impl GuardConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = serde_yaml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.min_name_length == 0 {
            return Err(ConfigError::Invalid(
                "min_name_length must be at least 1".to_string(),
            ));
        }
        if self.min_message_length == 0 {
            return Err(ConfigError::Invalid(
                "min_message_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
