use ammo_core::{
    AmmoTier, TrackerConfig, WeaponType, all_variants, compatible_weapons, expected_bonus_max_hit,
    find, tier_for_weapon, validate_catalog, variant_for, variants,
};
use strum::IntoEnumIterator;

#[test]
fn catalog_passes_validation() {
    validate_catalog().expect("built-in catalog must be consistent");
}

#[test]
fn special_chance_and_modifier_are_zero_together() {
    for variant in all_variants() {
        assert_eq!(
            variant.spec_chance == 0.0,
            variant.spec_level_modifier == 0.0,
            "{} in {}",
            variant,
            variant.tier
        );
    }
}

#[test]
fn variants_without_special_never_add_bonus() {
    for variant in all_variants().filter(|v| v.spec_level_modifier == 0.0) {
        for level in [-5, 0, 1, 40, 99, 112, 150] {
            assert_eq!(expected_bonus_max_hit(&variant, level), 0.0);
        }
    }
}

#[test]
fn bonus_is_non_decreasing_in_level() {
    for variant in all_variants().filter(|v| v.has_special()) {
        let mut previous = expected_bonus_max_hit(&variant, 1);
        for level in 2..=150 {
            let current = expected_bonus_max_hit(&variant, level);
            assert!(
                current >= previous,
                "{} dropped from {} to {} at level {}",
                variant,
                previous,
                current,
                level
            );
            previous = current;
        }
    }
}

#[test]
fn tier_for_weapon_inverts_compatibility() {
    for weapon in WeaponType::iter() {
        let tier = tier_for_weapon(weapon).expect("every weapon fires some tier");
        assert!(compatible_weapons(tier).contains(&weapon));

        let declaring = AmmoTier::iter()
            .filter(|t| compatible_weapons(*t).contains(&weapon))
            .count();
        assert_eq!(declaring, 1, "{} declared by {} tiers", weapon, declaring);
    }
}

#[test]
fn keyed_lookup_matches_tier_tables() {
    for tier in AmmoTier::iter() {
        for &weapon in compatible_weapons(tier) {
            for entry in variants(tier) {
                let keyed = variant_for(weapon, entry.kind).expect("kind exists in tier");
                assert_eq!(keyed, *entry);
                for level in [1, 75, 99, 118] {
                    assert_eq!(
                        expected_bonus_max_hit(&keyed, level),
                        expected_bonus_max_hit(entry, level)
                    );
                }
            }
        }
    }
}

#[test]
fn stronger_crossbows_unlock_dragon_bolts() {
    let config = TrackerConfig::default();
    let strong = config
        .selected_ammo(WeaponType::DragonCrossbow)
        .expect("strong bolts configured");
    assert_eq!(strong.tier, AmmoTier::StrongBolt);
    assert!(find(AmmoTier::Bolt, strong.kind).is_none());
}
