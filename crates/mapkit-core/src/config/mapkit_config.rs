//! Top-level mapkit configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CloneConfig;
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to `load`.
pub const CONFIG_FILE_NAME: &str = "mapkit.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MAPKIT_*`)
/// 2. Project config (`mapkit.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MapkitConfig {
    pub clone: CloneConfig,
}

impl MapkitConfig {
    /// Load configuration with layered resolution rooted at `root`.
    /// A missing `mapkit.toml` falls back to defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (no env layer).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: MapkitConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clone.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "clone.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.clone.max_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "clone.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MapkitConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: MapkitConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut MapkitConfig, other: &MapkitConfig) {
        if other.clone.threads.is_some() {
            base.clone.threads = other.clone.threads;
        }
        if other.clone.max_depth.is_some() {
            base.clone.max_depth = other.clone.max_depth;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MAPKIT_CLONE_THREADS`, `MAPKIT_CLONE_MAX_DEPTH`.
    fn apply_env_overrides(config: &mut MapkitConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_usize("MAPKIT_CLONE_THREADS")? {
            config.clone.threads = Some(v);
        }
        if let Some(v) = env_usize("MAPKIT_CLONE_MAX_DEPTH")? {
            config.clone.max_depth = Some(v);
        }
        Ok(())
    }
}

fn env_usize(var: &str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(var) {
        Ok(val) => val
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: var.to_string(),
                message: format!("{val:?}: {e}"),
            }),
        Err(_) => Ok(None),
    }
}
