//! Constant ammunition catalogs.
//!
//! Four disjoint tier tables, populated at compile time and never mutated.
//! Every lookup returns an [`AmmoVariant`] by value.

use crate::ammo::{AmmoKind, AmmoTier, AmmoVariant};
use crate::error::CatalogError;

use AmmoKind::*;
use AmmoTier::*;

/// Bolts priced for the rune crossbow.
pub static BOLT_AMMO: [AmmoVariant; 3] = [
    AmmoVariant::plain(Bolt, RuniteBolts, Some("Runite Bolts"), 9169, 115, 1.0),
    AmmoVariant::with_special(
        Bolt,
        DragonstoneBoltsE,
        "Dstone Bolts (e)",
        9281,
        117,
        0.2,
        0.06,
        1.0,
    ),
    AmmoVariant::plain(Bolt, DiamondBoltsE, Some("Diamond Bolts (e)"), 9277, 105, 1.015),
];

/// Bolts priced for the armadyl, dragon and dragon hunter crossbows.
pub static STRONG_BOLT_AMMO: [AmmoVariant; 6] = [
    AmmoVariant::plain(StrongBolt, RuniteBolts, Some("Runite Bolts"), 9169, 115, 1.0),
    AmmoVariant::with_special(
        StrongBolt,
        DragonstoneBoltsE,
        "Dstone Bolts (e)",
        9281,
        117,
        0.2,
        0.06,
        1.0,
    ),
    AmmoVariant::plain(
        StrongBolt,
        DiamondBoltsE,
        Some("Diamond Bolts (e)"),
        9277,
        105,
        1.015,
    ),
    AmmoVariant::with_special(
        StrongBolt,
        DragonstoneDragonBoltsE,
        "Dstone DBolts (e)",
        1668,
        122,
        0.2,
        0.06,
        1.0,
    ),
    AmmoVariant::with_special(
        StrongBolt,
        OpalDragonBoltsE,
        "Opal DBolts (e)",
        8729,
        122,
        0.1,
        0.05,
        1.0,
    ),
    AmmoVariant::plain(
        StrongBolt,
        DiamondDragonBoltsE,
        Some("Diamond DBolts (e)"),
        1690,
        122,
        1.015,
    ),
];

/// Darts for the toxic blowpipe.
pub static DART_AMMO: [AmmoVariant; 3] = [
    AmmoVariant::plain(Dart, AdamantDarts, Some("Adamant Darts"), 810, 10, 1.0),
    AmmoVariant::plain(Dart, RuneDarts, Some("Rune Darts"), 811, 14, 1.0),
    AmmoVariant::plain(Dart, DragonDarts, Some("Dragon Darts"), 11230, 20, 1.0),
];

/// Arrows and javelins. Not config-selectable, so no display names.
pub static OTHER_AMMO: [AmmoVariant; 3] = [
    AmmoVariant::plain(Other, AmethystArrows, None, 4770, 55, 1.0),
    AmmoVariant::plain(Other, DragonArrow, None, 11216, 60, 1.0),
    AmmoVariant::plain(Other, DragonJavelin, None, 19484, 150, 1.0),
];

const ALL_TIERS: [AmmoTier; 4] = [Bolt, StrongBolt, Dart, Other];

/// Returns the table for a tier.
pub fn variants(tier: AmmoTier) -> &'static [AmmoVariant] {
    match tier {
        Bolt => &BOLT_AMMO,
        StrongBolt => &STRONG_BOLT_AMMO,
        Dart => &DART_AMMO,
        Other => &OTHER_AMMO,
    }
}

/// Iterates every entry of every tier, base bolts first.
pub fn all_variants() -> impl Iterator<Item = AmmoVariant> {
    ALL_TIERS
        .into_iter()
        .flat_map(|tier| variants(tier).iter().copied())
}

pub fn find(tier: AmmoTier, kind: AmmoKind) -> Option<AmmoVariant> {
    variants(tier).iter().find(|v| v.kind == kind).copied()
}

pub fn find_by_item_id(tier: AmmoTier, item_id: u32) -> Option<AmmoVariant> {
    variants(tier).iter().find(|v| v.item_id == item_id).copied()
}

/// Looks up a variant by its display label, ignoring ASCII case.
///
/// Entries without a label (the other tier) never match.
pub fn find_by_name(tier: AmmoTier, name: &str) -> Option<AmmoVariant> {
    let name = name.trim();
    variants(tier)
        .iter()
        .find(|v| v.name.is_some_and(|n| n.eq_ignore_ascii_case(name)))
        .copied()
}

/// Enchanted diamond bolts, whose effect is a flat damage modifier.
pub fn diamond_bolts() -> [AmmoVariant; 3] {
    [BOLT_AMMO[2], STRONG_BOLT_AMMO[2], STRONG_BOLT_AMMO[5]]
}

pub fn is_diamond_bolt(variant: &AmmoVariant) -> bool {
    diamond_bolts().contains(variant)
}

/// Checks every catalog invariant over the built-in tables.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for tier in ALL_TIERS {
        validate_table(tier, variants(tier))?;
    }
    Ok(())
}

/// Checks a single table as if it were stored under `table`.
pub fn validate_table(table: AmmoTier, entries: &[AmmoVariant]) -> Result<(), CatalogError> {
    for (i, v) in entries.iter().enumerate() {
        if v.tier != table {
            return Err(CatalogError::TierMismatch {
                kind: v.kind,
                declared: v.tier,
                table,
            });
        }

        if (v.spec_chance == 0.0) != (v.spec_level_modifier == 0.0) {
            return Err(CatalogError::InconsistentSpecial {
                tier: v.tier,
                kind: v.kind,
                chance: v.spec_chance,
                modifier: v.spec_level_modifier,
            });
        }

        if !(0.0..=1.0).contains(&v.spec_chance) {
            return Err(CatalogError::ChanceOutOfRange {
                tier: v.tier,
                kind: v.kind,
                chance: v.spec_chance,
            });
        }

        if v.damage_modifier.is_nan() || v.damage_modifier <= 0.0 {
            return Err(CatalogError::NonPositiveDamageModifier {
                tier: v.tier,
                kind: v.kind,
                modifier: v.damage_modifier,
            });
        }

        if v.name.is_some() != table.is_selectable() {
            return Err(CatalogError::NamePresence {
                tier: v.tier,
                kind: v.kind,
            });
        }

        if entries[..i].iter().any(|prev| prev.kind == v.kind) {
            return Err(CatalogError::DuplicateKind {
                tier: v.tier,
                kind: v.kind,
            });
        }
    }
    Ok(())
}
