use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ConfigError;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs go to stderr
  pub file: Option<String>,
  /// Log level, default is "warn"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "warn".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Prompt configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// Prompt shown before each line in interactive mode
  #[serde(default = "default_prompt")]
  pub prompt: String,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_prompt() -> String {
  "> ".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      prompt: default_prompt(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> Result<Self, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_string(),
      source,
    })?;

    toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
      path: path.to_string(),
      source,
    })
  }
}
