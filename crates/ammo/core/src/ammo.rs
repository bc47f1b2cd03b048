//! Ammunition records and their tier grouping.

/// Weapon-compatibility grouping of ammunition entries.
///
/// Tiers are disjoint. The same [`AmmoKind`] may appear in both bolt tiers
/// because stronger crossbows unlock higher special-effect damage for the
/// same bolt.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AmmoTier {
    /// Bolts fired from the base (rune) crossbow.
    Bolt,
    /// Bolts fired from crossbows that unlock stronger specials.
    StrongBolt,
    /// Darts thrown from a blowpipe.
    Dart,
    /// Arrows and javelins, identified by item id only.
    Other,
}

impl AmmoTier {
    /// Returns true if entries in this tier carry a config-selectable name.
    pub const fn is_selectable(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Identity of an ammunition item, independent of the tier pricing it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AmmoKind {
    // Bolts
    RuniteBolts,
    DragonstoneBoltsE,
    DiamondBoltsE,
    DragonstoneDragonBoltsE,
    OpalDragonBoltsE,
    DiamondDragonBoltsE,

    // Darts
    AdamantDarts,
    RuneDarts,
    DragonDarts,

    // Arrows and javelins
    AmethystArrows,
    DragonArrow,
    DragonJavelin,
}

/// One kind of ranged ammunition as priced by a single tier.
///
/// Records are plain `Copy` values; catalogs hand them out by value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmmoVariant {
    pub tier: AmmoTier,
    pub kind: AmmoKind,
    /// Display label. Absent for [`AmmoTier::Other`] entries.
    pub name: Option<&'static str>,
    /// Opaque key into the host game's item catalog.
    pub item_id: u32,
    pub range_strength: u32,
    /// Fraction of the ranged level granted as special-effect damage cap.
    pub spec_level_modifier: f64,
    /// Probability that the special effect triggers.
    pub spec_chance: f64,
    /// Multiplier applied to computed hits; 1.0 is neutral.
    pub damage_modifier: f64,
}

impl AmmoVariant {
    /// Variant without a special effect.
    pub const fn plain(
        tier: AmmoTier,
        kind: AmmoKind,
        name: Option<&'static str>,
        item_id: u32,
        range_strength: u32,
        damage_modifier: f64,
    ) -> Self {
        Self {
            tier,
            kind,
            name,
            item_id,
            range_strength,
            spec_level_modifier: 0.0,
            spec_chance: 0.0,
            damage_modifier,
        }
    }

    /// Variant with a probabilistic special effect scaling off ranged level.
    #[allow(clippy::too_many_arguments)]
    pub const fn with_special(
        tier: AmmoTier,
        kind: AmmoKind,
        name: &'static str,
        item_id: u32,
        range_strength: u32,
        spec_level_modifier: f64,
        spec_chance: f64,
        damage_modifier: f64,
    ) -> Self {
        Self {
            tier,
            kind,
            name: Some(name),
            item_id,
            range_strength,
            spec_level_modifier,
            spec_chance,
            damage_modifier,
        }
    }

    /// Returns true if the variant has a level-scaled special effect.
    pub fn has_special(&self) -> bool {
        self.spec_level_modifier != 0.0
    }

    /// Label for display: the name if present, otherwise the kind.
    pub fn label(&self) -> &str {
        match self.name {
            Some(name) => name,
            None => self.kind.as_ref(),
        }
    }
}

impl core::fmt::Display for AmmoVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a display layer needs about one ammunition choice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmmoEstimate {
    pub variant: AmmoVariant,
    pub ranged_level: i32,
    pub range_strength: u32,
    pub bonus_max_hit: f64,
    pub damage_modifier: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_kind() {
        let javelin = AmmoVariant::plain(
            AmmoTier::Other,
            AmmoKind::DragonJavelin,
            None,
            19484,
            150,
            1.0,
        );
        assert_eq!(javelin.label(), "dragon_javelin");
        assert!(!javelin.has_special());

        let opal = AmmoVariant::with_special(
            AmmoTier::StrongBolt,
            AmmoKind::OpalDragonBoltsE,
            "Opal DBolts (e)",
            8729,
            122,
            0.1,
            0.05,
            1.0,
        );
        assert_eq!(opal.to_string(), "Opal DBolts (e)");
        assert!(opal.has_special());
    }

    #[test]
    fn only_other_tier_is_unselectable() {
        assert!(AmmoTier::Bolt.is_selectable());
        assert!(AmmoTier::StrongBolt.is_selectable());
        assert!(AmmoTier::Dart.is_selectable());
        assert!(!AmmoTier::Other.is_selectable());
    }
}
