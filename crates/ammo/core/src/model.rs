//! Damage-bonus computation over the ammunition catalog.
//!
//! Pure functions only. The shooter's ranged level is always an explicit
//! argument; nothing here reads configuration or global state.
//!
//! # Core Functions
//!
//! - `expected_bonus_max_hit`: expected extra damage per hit from specials
//! - `damage_modifier`: flat multiplier applied to computed hits
//! - `range_strength`: ranged-strength contribution to max hit
//! - `compatible_weapons`: declared weapon set of a tier
//! - `tier_for_weapon`: which tier prices a weapon's ammunition

use crate::ammo::{AmmoEstimate, AmmoKind, AmmoTier, AmmoVariant};
use crate::catalog;
use crate::weapon::WeaponType;

const BOLT_WEAPONS: [WeaponType; 1] = [WeaponType::RuneCrossbow];

const STRONG_BOLT_WEAPONS: [WeaponType; 3] = [
    WeaponType::ArmadylCrossbow,
    WeaponType::DragonCrossbow,
    WeaponType::DragonHunterCrossbow,
];

const DART_WEAPONS: [WeaponType; 1] = [WeaponType::ToxicBlowpipe];

/// Expected bonus damage per hit from the variant's special effect.
///
/// # Formula
///
/// ```text
/// effective_level = trunc(ranged_level × spec_level_modifier)
/// bonus           = effective_level × spec_chance
/// ```
///
/// This is an expected value for analytics, not a simulated roll. Variants
/// without a special effect yield exactly 0. Levels are not validated;
/// negative input gives a degenerate non-positive result.
pub fn expected_bonus_max_hit(variant: &AmmoVariant, ranged_level: i32) -> f64 {
    if !variant.has_special() {
        return 0.0;
    }

    // Truncation toward zero, matching the in-game integer cap.
    let effective_level = (f64::from(ranged_level) * variant.spec_level_modifier) as i32;
    f64::from(effective_level) * variant.spec_chance
}

/// Flat multiplier applied to computed hits; 1.0 leaves damage unchanged.
pub fn damage_modifier(variant: &AmmoVariant) -> f64 {
    variant.damage_modifier
}

/// Ranged-strength rating the variant adds to max hit.
pub fn range_strength(variant: &AmmoVariant) -> u32 {
    variant.range_strength
}

/// Weapons declared compatible with a tier.
///
/// [`AmmoTier::Other`] declares none: arrows and javelins are recognised by
/// item id from whatever is equipped rather than selected per weapon.
pub fn compatible_weapons(tier: AmmoTier) -> &'static [WeaponType] {
    match tier {
        AmmoTier::Bolt => &BOLT_WEAPONS,
        AmmoTier::StrongBolt => &STRONG_BOLT_WEAPONS,
        AmmoTier::Dart => &DART_WEAPONS,
        AmmoTier::Other => &[],
    }
}

/// Whether `weapon` is in the declared set of `tier`.
pub fn is_compatible(tier: AmmoTier, weapon: WeaponType) -> bool {
    compatible_weapons(tier).contains(&weapon)
}

/// Tier whose compatibility set contains `weapon`.
pub fn tier_for_weapon(weapon: WeaponType) -> Option<AmmoTier> {
    [AmmoTier::Bolt, AmmoTier::StrongBolt, AmmoTier::Dart]
        .into_iter()
        .find(|&tier| is_compatible(tier, weapon))
}

/// Variant of `kind` as priced for `weapon`.
///
/// Equivalent to looking `kind` up in the weapon's tier table.
pub fn variant_for(weapon: WeaponType, kind: AmmoKind) -> Option<AmmoVariant> {
    catalog::find(tier_for_weapon(weapon)?, kind)
}

/// Bundles every model output for one variant at one ranged level.
pub fn estimate(variant: &AmmoVariant, ranged_level: i32) -> AmmoEstimate {
    AmmoEstimate {
        variant: *variant,
        ranged_level,
        range_strength: range_strength(variant),
        bonus_max_hit: expected_bonus_max_hit(variant, ranged_level),
        damage_modifier: damage_modifier(variant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn strong(kind: AmmoKind) -> AmmoVariant {
        catalog::find(AmmoTier::StrongBolt, kind).unwrap()
    }

    #[test]
    fn dragonstone_bolts_at_99() {
        let dstone = catalog::find(AmmoTier::Bolt, AmmoKind::DragonstoneBoltsE).unwrap();
        // trunc(99 × 0.2) = 19, 19 × 0.06 = 1.14
        assert!((expected_bonus_max_hit(&dstone, 99) - 1.14).abs() < EPSILON);
        assert_eq!(damage_modifier(&dstone), 1.0);
    }

    #[test]
    fn opal_dragon_bolts_truncate_level() {
        let opal = strong(AmmoKind::OpalDragonBoltsE);
        // trunc(99 × 0.1) = 9, 9 × 0.05 = 0.45
        assert!((expected_bonus_max_hit(&opal, 99) - 0.45).abs() < EPSILON);
        // trunc(112 × 0.1) = 11
        assert!((expected_bonus_max_hit(&opal, 112) - 0.55).abs() < EPSILON);
    }

    #[test]
    fn diamond_bolts_only_modify_damage() {
        let diamond = catalog::find(AmmoTier::Bolt, AmmoKind::DiamondBoltsE).unwrap();
        for level in [1, 50, 99, 118] {
            assert_eq!(expected_bonus_max_hit(&diamond, level), 0.0);
        }
        assert_eq!(damage_modifier(&diamond), 1.015);
    }

    #[test]
    fn rune_darts_are_neutral() {
        let darts = catalog::find(AmmoTier::Dart, AmmoKind::RuneDarts).unwrap();
        assert_eq!(damage_modifier(&darts), 1.0);
        assert_eq!(expected_bonus_max_hit(&darts, 99), 0.0);
        assert_eq!(range_strength(&darts), 14);
    }

    #[test]
    fn negative_levels_degrade_without_panicking() {
        let dstone = strong(AmmoKind::DragonstoneBoltsE);
        assert!(expected_bonus_max_hit(&dstone, -10) <= 0.0);
        assert_eq!(expected_bonus_max_hit(&dstone, 0), 0.0);
    }

    #[test]
    fn strong_tier_weapons() {
        let weapons = compatible_weapons(AmmoTier::StrongBolt);
        assert!(weapons.contains(&WeaponType::ArmadylCrossbow));
        assert!(weapons.contains(&WeaponType::DragonCrossbow));
        assert!(weapons.contains(&WeaponType::DragonHunterCrossbow));
        assert!(!weapons.contains(&WeaponType::RuneCrossbow));
    }

    #[test]
    fn other_tier_is_compatible_with_nothing() {
        assert!(is_compatible(AmmoTier::Bolt, WeaponType::RuneCrossbow));
        assert!(!is_compatible(AmmoTier::Bolt, WeaponType::DragonCrossbow));
        assert!(is_compatible(AmmoTier::Dart, WeaponType::ToxicBlowpipe));
        for weapon in [
            WeaponType::RuneCrossbow,
            WeaponType::ArmadylCrossbow,
            WeaponType::DragonCrossbow,
            WeaponType::DragonHunterCrossbow,
            WeaponType::ToxicBlowpipe,
        ] {
            assert!(!is_compatible(AmmoTier::Other, weapon));
        }
    }

    #[test]
    fn weapon_resolves_to_single_tier() {
        assert_eq!(tier_for_weapon(WeaponType::RuneCrossbow), Some(AmmoTier::Bolt));
        assert_eq!(
            tier_for_weapon(WeaponType::DragonHunterCrossbow),
            Some(AmmoTier::StrongBolt)
        );
        assert_eq!(tier_for_weapon(WeaponType::ToxicBlowpipe), Some(AmmoTier::Dart));
        assert!(compatible_weapons(AmmoTier::Other).is_empty());
    }

    #[test]
    fn variant_for_uses_weapon_tier() {
        let from_rcb = variant_for(WeaponType::RuneCrossbow, AmmoKind::DiamondBoltsE).unwrap();
        let from_acb = variant_for(WeaponType::ArmadylCrossbow, AmmoKind::DiamondBoltsE).unwrap();
        assert_eq!(from_rcb.tier, AmmoTier::Bolt);
        assert_eq!(from_acb.tier, AmmoTier::StrongBolt);

        assert!(variant_for(WeaponType::RuneCrossbow, AmmoKind::DiamondDragonBoltsE).is_none());
        assert!(variant_for(WeaponType::ToxicBlowpipe, AmmoKind::RuniteBolts).is_none());
    }

    #[test]
    fn estimate_bundles_outputs() {
        let dstone = strong(AmmoKind::DragonstoneDragonBoltsE);
        let est = estimate(&dstone, 99);
        assert_eq!(est.variant, dstone);
        assert_eq!(est.ranged_level, 99);
        assert_eq!(est.range_strength, 122);
        assert!((est.bonus_max_hit - 1.14).abs() < EPSILON);
        assert_eq!(est.damage_modifier, 1.0);
    }
}
