//! Resolver configuration (TOML).
//!
//! ```toml
//! [registry]
//! custom_types = ["sendgrid", "kafka"]
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```
//!
//! Every section is optional; an empty file yields the defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::kind::fold_case;
use crate::registry::TypeRegistry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Named types registered on top of the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySection {
    #[serde(default)]
    pub custom_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// ERROR, WARN, INFO, DEBUG, TRACE (case-insensitive)
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ResolverConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Custom type names must be non-empty, unique (ignoring case) and must
    /// not shadow a built-in type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let builtin = TypeRegistry::builtin();
        let mut seen = HashSet::new();
        for name in &self.registry.custom_types {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "registry.custom_types contains an empty name".to_string(),
                ));
            }
            if builtin.contains(name) {
                return Err(ConfigError::Invalid(format!(
                    "registry.custom_types entry '{name}' shadows a built-in type"
                )));
            }
            if !seen.insert(fold_case(name)) {
                return Err(ConfigError::Invalid(format!(
                    "registry.custom_types lists '{name}' more than once"
                )));
            }
        }
        Ok(())
    }
}
