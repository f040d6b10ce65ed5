//! Development tasks for the damage calculator
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`
//!
//! Every calculation command reads its bundles from a data directory
//! (`--data-dir`, default `data/`); `export-fixtures` writes one to start from.

mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Ar, Combos, Enemy, ExportFixtures, Guard, Optimize, Skill, Validate};
use tracing_subscriber::EnvFilter;

/// Development tasks for the damage calculator
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Weapon, skill and stat calculators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Attack Rating breakdown for one weapon
    Ar(Ar),

    /// Guard absorption and boost
    Guard(Guard),

    /// Skill (Ash of War) damage per hit
    Skill(Skill),

    /// Damage dealt to an enemy after defense and negation
    Enemy(Enemy),

    /// Best stat allocation for a point budget
    Optimize(Optimize),

    /// Classify attack chains from frame data
    Combos(Combos),

    /// Check data bundles for dangling references
    Validate(Validate),

    /// Write the built-in sample bundles to a directory
    ExportFixtures(ExportFixtures),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Ar(cmd) => cmd.execute(),
        Command::Guard(cmd) => cmd.execute(),
        Command::Skill(cmd) => cmd.execute(),
        Command::Enemy(cmd) => cmd.execute(),
        Command::Optimize(cmd) => cmd.execute(),
        Command::Combos(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
        Command::ExportFixtures(cmd) => cmd.execute(),
    }
}
