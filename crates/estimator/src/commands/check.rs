//! Validate catalog and configuration command

use std::path::PathBuf;

use ammo_core::{CatalogError, ModelError, TrackerConfig, validate_catalog};
use anyhow::Result;
use clap::Parser;
use console::style;

use crate::settings;

/// Validate the catalog and configuration
#[derive(Parser, Debug)]
pub struct Check {
    /// Tracker config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        check_catalog(validate_catalog())?;
        println!("{} Catalog", style("✓").green().bold());

        // Load without validating so the failure is reported here, with its code
        let config = settings::resolve_unvalidated(self.config.as_deref(), None)?;
        check_config(&config)?;
        println!(
            "{} Config (ranged level {}, bolt {}, strong bolt {}, dart {})",
            style("✓").green().bold(),
            config.ranged_level,
            config.bolt,
            config.strong_bolt,
            config.dart
        );

        Ok(())
    }
}

fn check_catalog(result: Result<(), CatalogError>) -> Result<()> {
    if let Err(err) = result {
        tracing::error!(
            code = err.error_code(),
            severity = err.severity().as_str(),
            "Catalog check failed: {}",
            err
        );
        return Err(err.into());
    }
    Ok(())
}

fn check_config(config: &TrackerConfig) -> Result<()> {
    if let Err(err) = config.validate() {
        tracing::warn!(
            code = err.error_code(),
            severity = err.severity().as_str(),
            "Config check failed: {}",
            err
        );
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use ammo_core::catalog::{DART_AMMO, validate_table};
    use ammo_core::{AmmoKind, AmmoTier, ConfigError};

    #[test]
    fn bad_config_file_fails_with_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"bolt = "dragon_darts""#).unwrap();

        let err = Check {
            config: Some(file.path().to_path_buf()),
        }
        .execute()
        .unwrap_err();

        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(
            *config_err,
            ConfigError::AmmoNotInTier {
                kind: AmmoKind::DragonDarts,
                tier: AmmoTier::Bolt,
            }
        );
        assert_eq!(config_err.error_code(), "CONFIG_AMMO_NOT_IN_TIER");
    }

    #[test]
    fn good_config_file_passes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"ranged_level = 90
strong_bolt = "opal_dragon_bolts_e""#
        )
        .unwrap();

        Check {
            config: Some(file.path().to_path_buf()),
        }
        .execute()
        .unwrap();
    }

    #[test]
    fn catalog_failure_keeps_catalog_error() {
        assert!(check_catalog(Ok(())).is_ok());

        let err = check_catalog(validate_table(AmmoTier::Bolt, &DART_AMMO)).unwrap_err();
        assert!(err.downcast_ref::<CatalogError>().is_some());
    }
}
