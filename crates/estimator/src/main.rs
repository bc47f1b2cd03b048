//! Offline ranged ammunition estimator.
//!
//! Lists the ammunition catalog, shows which weapons fire which tier, and
//! prints the damage-bonus estimate a tracker would display for a weapon.
//! Run with: `cargo run -p ammo-estimator -- <command>`

mod commands;
mod dirs;
mod logging;
mod parse;
mod settings;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Estimate, List, Weapons};

/// Ranged ammunition damage-bonus estimator
#[derive(Parser)]
#[command(name = "ammo-estimator")]
#[command(about = "Inspect ranged ammunition and estimate damage bonuses", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List catalog entries
    List(List),

    /// Show weapon compatibility per tier
    Weapons(Weapons),

    /// Estimate damage bonuses for a weapon
    Estimate(Estimate),

    /// Validate the catalog and configuration
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AMMO_CONFIG, RANGED_LEVEL, RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let _guard = logging::setup_logging(cli.log_file.as_deref())?;

    // `check` reports catalog failures itself
    if !matches!(cli.command, Command::Check(_)) {
        ammo_core::validate_catalog()?;
        tracing::debug!("Built-in catalog validated");
    }

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Weapons(cmd) => cmd.execute(),
        Command::Estimate(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
    }
}
