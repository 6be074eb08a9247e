//! Policy configuration loading.
//!
//! This module provides the [`PolicyLoader`] type for loading policy
//! defaults from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyConfig, PolicyDefaults};

/// Loads and provides access to a policy configuration.
///
/// # Example
///
/// ```no_run
/// use absence_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy/nav_2025.yaml").unwrap();
/// assert_eq!(loader.defaults().employer_period_days, 16);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads a policy configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file does not exist
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML for
    /// the expected structure.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let config: PolicyConfig =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the full policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the default values.
    pub fn defaults(&self) -> &PolicyDefaults {
        &self.config.defaults
    }
}
