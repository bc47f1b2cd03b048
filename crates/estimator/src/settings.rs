//! Tracker configuration resolution.
//!
//! Source order:
//! 1. `--config <path>`
//! 2. `AMMO_CONFIG` environment variable
//! 3. `config.toml` in the platform config directory, if it exists
//! 4. Built-in defaults
//!
//! The ranged level is then overridden by `RANGED_LEVEL`, and finally by
//! `--level`.

use std::env;
use std::path::{Path, PathBuf};

use ammo_content::ConfigLoader;
use ammo_core::TrackerConfig;
use anyhow::Result;

use crate::dirs;

/// Where a config came from, for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Argument(PathBuf),
    Environment(PathBuf),
    UserDefault(PathBuf),
    BuiltIn,
}

/// Load and validate the tracker config the way every command does.
pub fn resolve(explicit: Option<&Path>, level: Option<i32>) -> Result<TrackerConfig> {
    let config = resolve_unvalidated(explicit, level)?;
    config.validate()?;
    Ok(config)
}

/// Load the tracker config without checking its ammunition choices.
pub fn resolve_unvalidated(explicit: Option<&Path>, level: Option<i32>) -> Result<TrackerConfig> {
    let env_path = env::var_os("AMMO_CONFIG").map(PathBuf::from);
    let source = pick_source(explicit, env_path, dirs::default_config_path());

    let config = load_from(&source)?;
    let env_level = parse_env_level(env::var("RANGED_LEVEL").ok().as_deref());
    let config = apply_level_overrides(config, env_level, level);

    tracing::debug!(
        "Resolved config: ranged_level={}, bolt={}, strong_bolt={}, dart={}",
        config.ranged_level,
        config.bolt,
        config.strong_bolt,
        config.dart
    );

    Ok(config)
}

fn pick_source(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    user_default: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Argument(path.to_path_buf());
    }
    if let Some(path) = env_path {
        return ConfigSource::Environment(path);
    }
    match user_default {
        Some(path) if path.exists() => ConfigSource::UserDefault(path),
        _ => ConfigSource::BuiltIn,
    }
}

fn load_from(source: &ConfigSource) -> Result<TrackerConfig> {
    match source {
        ConfigSource::Argument(path)
        | ConfigSource::Environment(path)
        | ConfigSource::UserDefault(path) => {
            tracing::info!("Loading config from {}", path.display());
            ConfigLoader::load_unvalidated(path)
        }
        ConfigSource::BuiltIn => {
            tracing::info!("No config file found, using built-in defaults");
            Ok(TrackerConfig::default())
        }
    }
}

fn apply_level_overrides(
    mut config: TrackerConfig,
    env_level: Option<i32>,
    cli_level: Option<i32>,
) -> TrackerConfig {
    if let Some(level) = cli_level.or(env_level) {
        config.ranged_level = level;
    }
    config
}

/// Parse a `RANGED_LEVEL` value, warning when it is set but unusable.
fn parse_env_level(raw: Option<&str>) -> Option<i32> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(level) => Some(level),
        Err(e) => {
            tracing::warn!("Ignoring RANGED_LEVEL={:?}: {}", raw, e);
            None
        }
    }
}
