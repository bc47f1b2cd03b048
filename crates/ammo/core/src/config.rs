use crate::ammo::{AmmoEstimate, AmmoKind, AmmoTier, AmmoVariant};
use crate::catalog;
use crate::error::ConfigError;
use crate::model;
use crate::weapon::WeaponType;

/// Tracker settings supplied by the host configuration.
///
/// The ranged level is host-owned and mutable on its side; here it is just a
/// value handed to the model on every estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TrackerConfig {
    /// Shooter's ranged level, including temporary boosts.
    pub ranged_level: i32,
    /// Bolt assumed for the rune crossbow.
    pub bolt: AmmoKind,
    /// Bolt assumed for armadyl/dragon/dragon hunter crossbows.
    pub strong_bolt: AmmoKind,
    /// Dart assumed for the blowpipe.
    pub dart: AmmoKind,
}

impl TrackerConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RANGED_LEVEL: i32 = 99;
    pub const DEFAULT_BOLT: AmmoKind = AmmoKind::DiamondBoltsE;
    pub const DEFAULT_STRONG_BOLT: AmmoKind = AmmoKind::DiamondDragonBoltsE;
    pub const DEFAULT_DART: AmmoKind = AmmoKind::DragonDarts;

    pub fn new() -> Self {
        Self {
            ranged_level: Self::DEFAULT_RANGED_LEVEL,
            bolt: Self::DEFAULT_BOLT,
            strong_bolt: Self::DEFAULT_STRONG_BOLT,
            dart: Self::DEFAULT_DART,
        }
    }

    pub fn with_ranged_level(mut self, ranged_level: i32) -> Self {
        self.ranged_level = ranged_level;
        self
    }

    /// Ensures every chosen ammunition exists in the tier it was chosen for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (tier, kind) in self.choices() {
            if catalog::find(tier, kind).is_none() {
                return Err(ConfigError::AmmoNotInTier { kind, tier });
            }
        }
        Ok(())
    }

    /// Configured ammunition for a tier, if that tier is selectable.
    pub fn choice(&self, tier: AmmoTier) -> Option<AmmoKind> {
        match tier {
            AmmoTier::Bolt => Some(self.bolt),
            AmmoTier::StrongBolt => Some(self.strong_bolt),
            AmmoTier::Dart => Some(self.dart),
            AmmoTier::Other => None,
        }
    }

    /// The variant `weapon` fires under this configuration.
    pub fn selected_ammo(&self, weapon: WeaponType) -> Option<AmmoVariant> {
        let tier = model::tier_for_weapon(weapon)?;
        catalog::find(tier, self.choice(tier)?)
    }

    /// Estimate for `weapon` using the configured ammunition and level.
    pub fn estimate_for(&self, weapon: WeaponType) -> Option<AmmoEstimate> {
        self.selected_ammo(weapon)
            .map(|variant| model::estimate(&variant, self.ranged_level))
    }

    fn choices(&self) -> [(AmmoTier, AmmoKind); 3] {
        [
            (AmmoTier::Bolt, self.bolt),
            (AmmoTier::StrongBolt, self.strong_bolt),
            (AmmoTier::Dart, self.dart),
        ]
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}
