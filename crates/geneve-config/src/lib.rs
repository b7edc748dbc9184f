//! Configuration system for Geneve.
//!
//! Load generator configuration from TOML or YAML files to control the
//! random budget and reproducibility of record generation without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use geneve_config::{EnvironmentMode, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//!     random_attempts = 25
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
//! assert_eq!(config.random_attempts, 25);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use geneve_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load("geneve.toml").unwrap_or_default();
//! assert_eq!(config.random_attempts, 100);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of fields per record that may be filled at random.
pub const DEFAULT_RANDOM_ATTEMPTS: u32 = 100;

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

/// Main generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible records.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Random choices allowed per record, shared by all its fields.
    #[serde(default = "default_random_attempts")]
    pub random_attempts: u32,
}

fn default_random_attempts() -> u32 {
    DEFAULT_RANDOM_ATTEMPTS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::default(),
            random_seed: None,
            random_attempts: DEFAULT_RANDOM_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the per-record random budget.
    pub fn with_random_attempts(mut self, attempts: u32) -> Self {
        self.random_attempts = attempts;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Checks settings that cannot be expressed in the file format.
    ///
    /// Reproducible mode needs a seed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment_mode == EnvironmentMode::Reproducible && self.random_seed.is_none() {
            return Err(ConfigError::Invalid(
                "reproducible environment mode requires random_seed".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting generator behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Fresh OS entropy unless a seed is given.
    #[default]
    NonReproducible,

    /// Same seed, same records.
    Reproducible,
}
