//! Error infrastructure for ammo-core.
//!
//! The damage model itself is total and never fails. Errors only arise when
//! checking reference data: the built-in catalogs at startup and the
//! user-supplied tracker configuration.
//!
//! # Design Principles
//!
//! - **Type Safety**: Catalog and config checks each have their own error type
//! - **Rich Context**: Variants name the tier and kind that failed
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::ammo::{AmmoKind, AmmoTier};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid user input that should be fixed and retried
/// - **Internal**: Built-in reference data is inconsistent; a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: a config choosing darts as its bolt
    Validation,

    /// Internal error - reference data violates an invariant.
    ///
    /// Examples: a special chance without a level modifier
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all ammo-core errors.
pub trait ModelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Violations of the catalog invariants.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Exactly one of special chance / level modifier is zero.
    #[error("{tier}/{kind}: special chance {chance} and level modifier {modifier} must both be zero or both non-zero")]
    InconsistentSpecial {
        tier: AmmoTier,
        kind: AmmoKind,
        chance: f64,
        modifier: f64,
    },

    #[error("{tier}/{kind}: special chance {chance} is outside [0, 1]")]
    ChanceOutOfRange {
        tier: AmmoTier,
        kind: AmmoKind,
        chance: f64,
    },

    #[error("{tier}/{kind}: damage modifier {modifier} must be positive")]
    NonPositiveDamageModifier {
        tier: AmmoTier,
        kind: AmmoKind,
        modifier: f64,
    },

    /// Entry stored in a table other than the tier it declares.
    #[error("{kind} declares tier {declared} but is stored in {table}")]
    TierMismatch {
        kind: AmmoKind,
        declared: AmmoTier,
        table: AmmoTier,
    },

    /// Selectable tiers need names, the other tier must not have them.
    #[error("{tier}/{kind}: display name presence does not match tier")]
    NamePresence { tier: AmmoTier, kind: AmmoKind },

    #[error("{tier}/{kind}: kind listed more than once")]
    DuplicateKind { tier: AmmoTier, kind: AmmoKind },
}

impl ModelError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InconsistentSpecial { .. } => "CATALOG_INCONSISTENT_SPECIAL",
            Self::ChanceOutOfRange { .. } => "CATALOG_CHANCE_OUT_OF_RANGE",
            Self::NonPositiveDamageModifier { .. } => "CATALOG_NON_POSITIVE_MODIFIER",
            Self::TierMismatch { .. } => "CATALOG_TIER_MISMATCH",
            Self::NamePresence { .. } => "CATALOG_NAME_PRESENCE",
            Self::DuplicateKind { .. } => "CATALOG_DUPLICATE_KIND",
        }
    }
}

/// Invalid tracker configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Configured ammunition is not offered by the tier it was chosen for.
    #[error("{kind} is not available as {tier} ammunition")]
    AmmoNotInTier { kind: AmmoKind, tier: AmmoTier },
}

impl ModelError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AmmoNotInTier { .. } => "CONFIG_AMMO_NOT_IN_TIER",
        }
    }
}
