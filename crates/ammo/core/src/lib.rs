//! Ranged ammunition reference data and damage-bonus model.
//!
//! `ammo-core` holds the constant ammunition catalogs and the pure functions
//! that turn a catalog entry plus a ranged level into the numbers a
//! performance tracker displays: ranged strength, expected bonus max hit
//! from bolt specials, and flat damage modifiers. Loaders and tools depend on
//! the types re-exported here.
pub mod ammo;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod weapon;

pub use ammo::{AmmoEstimate, AmmoKind, AmmoTier, AmmoVariant};
pub use catalog::{
    all_variants, diamond_bolts, find, find_by_item_id, find_by_name, is_diamond_bolt,
    validate_catalog, variants,
};
pub use config::TrackerConfig;
pub use error::{CatalogError, ConfigError, ErrorSeverity, ModelError};
pub use model::{
    compatible_weapons, damage_modifier, estimate, expected_bonus_max_hit, is_compatible,
    range_strength, tier_for_weapon, variant_for,
};
pub use weapon::WeaponType;
