//! Weapon compatibility command

use ammo_core::{AmmoTier, compatible_weapons};
use anyhow::Result;
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

use crate::parse;

/// Show weapon compatibility per tier
#[derive(Parser, Debug)]
pub struct Weapons {
    /// Only show this tier
    #[arg(long, value_parser = parse::tier)]
    pub tier: Option<AmmoTier>,
}

impl Weapons {
    pub fn execute(self) -> Result<()> {
        for tier in AmmoTier::iter().filter(|t| self.tier.is_none_or(|only| only == *t)) {
            let weapons = compatible_weapons(tier);
            if weapons.is_empty() {
                println!(
                    "{:<12} {}",
                    style(tier).green(),
                    style("(matched by item id)").dim()
                );
                continue;
            }

            let names: Vec<&str> = weapons.iter().map(|w| w.as_ref()).collect();
            println!("{:<12} {}", style(tier).green(), names.join(", "));
        }
        Ok(())
    }
}
