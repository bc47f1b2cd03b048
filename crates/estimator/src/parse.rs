//! Command-line value parsers for model enums.

use std::str::FromStr;

use ammo_core::{AmmoTier, WeaponType};
use strum::IntoEnumIterator;

pub fn weapon(value: &str) -> Result<WeaponType, String> {
    WeaponType::from_str(value).map_err(|_| unknown("weapon", value, WeaponType::iter()))
}

pub fn tier(value: &str) -> Result<AmmoTier, String> {
    AmmoTier::from_str(value).map_err(|_| unknown("tier", value, AmmoTier::iter()))
}

fn unknown<T: AsRef<str>>(what: &str, value: &str, options: impl Iterator<Item = T>) -> String {
    let options: Vec<String> = options.map(|o| o.as_ref().to_string()).collect();
    format!("unknown {} '{}' (expected one of: {})", what, value, options.join(", "))
}
