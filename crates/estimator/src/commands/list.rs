//! List catalog entries command

use ammo_core::{AmmoTier, AmmoVariant, is_diamond_bolt, variants};
use anyhow::Result;
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

use crate::parse;

/// List catalog entries
#[derive(Parser, Debug)]
pub struct List {
    /// Only show this tier (bolt, strong_bolt, dart, other)
    #[arg(long, value_parser = parse::tier)]
    pub tier: Option<AmmoTier>,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let tiers: Vec<AmmoTier> = match self.tier {
            Some(tier) => vec![tier],
            None => AmmoTier::iter().collect(),
        };

        for tier in tiers {
            println!("{}", style(tier).green().bold());
            println!(
                "  {:<26} {:>6} {:>5} {:>7} {:>7} {:>7}",
                style("Ammo").dim(),
                style("Item").dim(),
                style("Str").dim(),
                style("LvlMod").dim(),
                style("Chance").dim(),
                style("DmgMod").dim()
            );
            for variant in variants(tier) {
                println!("  {}", format_row(variant));
            }
            println!();
        }

        Ok(())
    }
}

fn format_row(variant: &AmmoVariant) -> String {
    let marker = if is_diamond_bolt(variant) { " *" } else { "" };
    format!(
        "{:<26} {:>6} {:>5} {:>7.2} {:>7.2} {:>7.3}{}",
        variant.label(),
        variant.item_id,
        variant.range_strength,
        variant.spec_level_modifier,
        variant.spec_chance,
        variant.damage_modifier,
        marker
    )
}
