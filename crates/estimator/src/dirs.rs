//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for config directories.

use std::path::PathBuf;

/// Get the platform-specific config directory for the estimator
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/ammo-estimator`
/// - Linux: `~/.config/ammo-estimator` (or `$XDG_CONFIG_HOME/ammo-estimator`)
/// - Windows: `%APPDATA%\ammo-estimator\config`
///
/// Returns `None` when no home directory can be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ammo-estimator")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default location of the tracker config file.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
