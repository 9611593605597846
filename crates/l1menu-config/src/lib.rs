//! Configuration for the menu rate engine.
//!
//! Controls how the event loop is spread over threads and whether a sample
//! with no weight is rejected, without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use l1menu_config::{Parallelism, RateConfig};
//!
//! let config = RateConfig::from_toml_str(r#"
//!     chunk_size = 1024
//!     reject_degenerate_sample = true
//!
//!     [parallelism]
//!     threads = 4
//! "#).unwrap();
//!
//! assert_eq!(config.parallelism, Parallelism::Threads(4));
//! assert_eq!(config.chunk_size, 1024);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use l1menu_config::RateConfig;
//!
//! let config = RateConfig::load("rates.toml").unwrap_or_default();
//! assert!(config.parallelism.is_serial());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Events per chunk when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Rate engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RateConfig {
    /// How the event loop is parallelised.
    #[serde(default)]
    pub parallelism: Parallelism,

    /// Number of consecutive events accumulated together before merging.
    ///
    /// Results are bit-identical for any thread count as long as this stays
    /// the same.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Fail instead of returning non-finite statistics when the sample
    /// carries no weight.
    #[serde(default)]
    pub reject_degenerate_sample: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            parallelism: Parallelism::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            reject_degenerate_sample: false,
        }
    }
}

impl RateConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`RateConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the parallelism mode.
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the number of events per chunk.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Rejects samples with zero total weight.
    pub fn with_reject_degenerate_sample(mut self, reject: bool) -> Self {
        self.reject_degenerate_sample = reject;
        self
    }

    /// Checks values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero chunk size or zero threads.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunk_size must be positive".into()));
        }
        if self.parallelism == Parallelism::Threads(0) {
            return Err(ConfigError::Invalid("parallelism threads must be positive".into()));
        }
        Ok(())
    }
}

/// How the event loop is spread over threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// One pass on the calling thread.
    #[default]
    Serial,

    /// Chunks run on the global rayon pool.
    Auto,

    /// Chunks run on a dedicated pool with this many threads.
    Threads(usize),
}

impl Parallelism {
    pub fn is_serial(&self) -> bool {
        matches!(self, Parallelism::Serial)
    }
}
