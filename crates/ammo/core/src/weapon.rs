//! Ranged weapon identities.

/// Ranged weapons whose ammunition the model knows how to price.
///
/// A weapon only matters here through the ammunition tier it fires; see
/// [`crate::model::tier_for_weapon`].
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
pub enum WeaponType {
    // Crossbows firing base-tier bolts
    RuneCrossbow,

    // Crossbows that unlock stronger bolt specials
    ArmadylCrossbow,
    DragonCrossbow,
    DragonHunterCrossbow,

    // Dart throwers
    ToxicBlowpipe,
}

impl WeaponType {
    /// Returns true for every crossbow variant.
    pub const fn is_crossbow(&self) -> bool {
        !matches!(self, Self::ToxicBlowpipe)
    }
}
