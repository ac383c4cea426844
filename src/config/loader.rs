//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ComplianceConfig, JurisdictionMetadata};

/// Loads and provides access to a jurisdiction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the statutory limits and jurisdiction metadata.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/aml/
/// ├── jurisdiction.yaml   # Statute metadata
/// └── limits.yaml         # Statutory limits
/// ```
///
/// # Example
///
/// ```no_run
/// use compliance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/aml").unwrap();
/// println!("Jurisdiction: {}", loader.metadata().name);
/// println!("Daily cap: {} hours", loader.config().max_daily_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: JurisdictionMetadata,
    config: ComplianceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/aml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any limit is outside its legal range (non-positive hours, or an
    ///   overtime multiplier below the statutory minimum)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&metadata_path)?;

        let limits_path = path.join("limits.yaml");
        let config = Self::load_yaml::<ComplianceConfig>(&limits_path)?;
        config.validate()?;

        Ok(Self { metadata, config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the loaded statutory limits.
    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }
}
