//! Estimate damage bonuses command
//!
//! Resolves the ammunition a weapon fires, either from `--ammo` or from the
//! tracker config, and prints the model outputs at the configured level.

use std::path::PathBuf;
use std::str::FromStr;

use ammo_core::{
    AmmoEstimate, AmmoKind, AmmoVariant, TrackerConfig, WeaponType, estimate, find_by_name,
    is_diamond_bolt, tier_for_weapon, variant_for,
};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::{parse, settings};

/// Estimate damage bonuses for a weapon
#[derive(Parser, Debug)]
pub struct Estimate {
    /// Equipped weapon (e.g. dragon_crossbow, toxic_blowpipe)
    #[arg(long, value_parser = parse::weapon)]
    pub weapon: WeaponType,

    /// Ammunition, by kind (opal_dragon_bolts_e) or display name ("Opal DBolts (e)").
    /// Defaults to the configured choice for the weapon's tier.
    #[arg(long)]
    pub ammo: Option<String>,

    /// Ranged level, overriding config and RANGED_LEVEL
    #[arg(long, allow_hyphen_values = true)]
    pub level: Option<i32>,

    /// Tracker config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

impl Estimate {
    pub fn execute(self) -> Result<()> {
        let config = settings::resolve(self.config.as_deref(), self.level)?;
        let variant = resolve_variant(self.weapon, self.ammo.as_deref(), &config)?;

        tracing::info!(
            "Estimating {} fired from {} at ranged level {}",
            variant,
            self.weapon,
            config.ranged_level
        );

        let result = estimate(&variant, config.ranged_level);

        if self.json {
            let text =
                serde_json::to_string_pretty(&result).context("Failed to encode estimate")?;
            println!("{}", text);
        } else {
            print_estimate(self.weapon, &result);
        }

        Ok(())
    }
}

/// Pick the variant for `weapon`: explicit ammo first, then config.
fn resolve_variant(
    weapon: WeaponType,
    ammo: Option<&str>,
    config: &TrackerConfig,
) -> Result<AmmoVariant> {
    let tier = tier_for_weapon(weapon)
        .with_context(|| format!("{} does not fire any known ammunition tier", weapon))?;

    let Some(ammo) = ammo else {
        tracing::debug!("No --ammo given, using configured {} choice", tier);
        return config
            .selected_ammo(weapon)
            .with_context(|| format!("Configured {} ammunition is not in the catalog", tier));
    };

    let by_kind = AmmoKind::from_str(ammo.trim())
        .ok()
        .and_then(|kind| variant_for(weapon, kind));

    by_kind
        .or_else(|| find_by_name(tier, ammo))
        .with_context(|| format!("'{}' is not {} ammunition for {}", ammo, tier, weapon))
}

fn print_estimate(weapon: WeaponType, result: &AmmoEstimate) {
    let variant = &result.variant;
    println!(
        "{} {} {} {}",
        style(variant.label()).cyan().bold(),
        style("from").dim(),
        style(weapon).cyan(),
        style(format!("({} tier)", variant.tier)).dim()
    );
    println!("  Ranged level:    {}", result.ranged_level);
    println!("  Ranged strength: {}", result.range_strength);
    println!("  Bonus max hit:   {:.2}", result.bonus_max_hit);
    println!("  Damage modifier: {:.3}", result.damage_modifier);
    if is_diamond_bolt(variant) {
        println!("  {}", style("Enchanted diamond bolts").dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammo_core::AmmoTier;

    #[test]
    fn explicit_kind_uses_weapon_tier() {
        let config = TrackerConfig::default();
        let variant = resolve_variant(
            WeaponType::RuneCrossbow,
            Some("dragonstone_bolts_e"),
            &config,
        )
        .unwrap();
        assert_eq!(variant.tier, AmmoTier::Bolt);
        assert_eq!(variant.kind, AmmoKind::DragonstoneBoltsE);
    }

    #[test]
    fn explicit_display_name_is_accepted() {
        let config = TrackerConfig::default();
        let variant =
            resolve_variant(WeaponType::DragonCrossbow, Some("opal dbolts (e)"), &config).unwrap();
        assert_eq!(variant.kind, AmmoKind::OpalDragonBoltsE);
    }

    #[test]
    fn falls_back_to_config_choice() {
        let config = TrackerConfig {
            dart: AmmoKind::AdamantDarts,
            ..TrackerConfig::default()
        };
        let variant = resolve_variant(WeaponType::ToxicBlowpipe, None, &config).unwrap();
        assert_eq!(variant.kind, AmmoKind::AdamantDarts);
    }

    #[test]
    fn ammo_from_another_tier_is_rejected() {
        let config = TrackerConfig::default();
        let err = resolve_variant(WeaponType::RuneCrossbow, Some("opal_dragon_bolts_e"), &config)
            .unwrap_err();
        assert!(err.to_string().contains("is not bolt ammunition"));

        assert!(resolve_variant(WeaponType::ToxicBlowpipe, Some("Runite Bolts"), &config).is_err());
    }

    #[test]
    fn json_output_carries_model_values() {
        let variant = resolve_variant(
            WeaponType::ArmadylCrossbow,
            Some("dragonstone_dragon_bolts_e"),
            &TrackerConfig::default(),
        )
        .unwrap();
        let value = serde_json::to_value(estimate(&variant, 99)).unwrap();
        assert_eq!(value["range_strength"], 122);
        assert_eq!(value["variant"]["tier"], "strong_bolt");
        assert_eq!(value["variant"]["name"], "Dstone DBolts (e)");
        assert!((value["bonus_max_hit"].as_f64().unwrap() - 1.14).abs() < 1e-9);
    }
}
