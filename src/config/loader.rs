//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ServiceError, ServiceResult};

use super::types::ServiceConfig;

/// Name of the configuration file inside a configuration directory.
pub const SERVICE_CONFIG_FILE: &str = "service.yaml";

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/paydigest/
/// └── service.yaml   # server, budget, rate_limit and history sections
/// ```
///
/// # Example
///
/// ```no_run
/// use paycheck_digest::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/paydigest")?;
/// println!("Binding to {}", loader.config().server.bind_address);
/// # Ok::<(), paycheck_digest::error::ServiceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from `service.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `service.yaml` is missing
    /// - the file is not valid YAML or has fields of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let file = path.as_ref().join(SERVICE_CONFIG_FILE);
        let config = Self::load_yaml::<ServiceConfig>(&file)?;
        Ok(Self { config })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> ServiceResult<Self> {
        let config = serde_yaml::from_str(content).map_err(|e| ServiceError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ServiceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ServiceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}
