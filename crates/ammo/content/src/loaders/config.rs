//! Tracker configuration loader.

use std::path::Path;

use ammo_core::TrackerConfig;
use anyhow::Context;

use crate::loaders::{LoadResult, read_file};

/// Loader for tracker configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing TrackerConfig
    ///
    /// # Returns
    ///
    /// Returns a validated TrackerConfig. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<TrackerConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load config data from a TOML file without checking tier choices.
    ///
    /// Used by callers that report [`ammo_core::ConfigError`]s themselves.
    pub fn load_unvalidated(path: &Path) -> LoadResult<TrackerConfig> {
        let content = read_file(path)?;
        Self::parse_unvalidated(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate config data from TOML text.
    ///
    /// Validation failures keep their [`ammo_core::ConfigError`] for downcasting.
    pub fn parse(content: &str) -> LoadResult<TrackerConfig> {
        let config = Self::parse_unvalidated(content)?;

        config.validate()?;

        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse_unvalidated(content: &str) -> LoadResult<TrackerConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }

    /// Render a config back into the TOML file format.
    pub fn to_toml(config: &TrackerConfig) -> LoadResult<String> {
        toml::to_string(config).map_err(|e| anyhow::anyhow!("Failed to encode config TOML: {}", e))
    }
}
