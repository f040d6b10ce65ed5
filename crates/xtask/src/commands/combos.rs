//! Combo classification from a frame-data file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_core::{AttackFrames, ComboKind, pair_attacks};
use clap::Parser;
use console::style;

use crate::args::{heading, print_json};

/// Classify attack chains from frame data
#[derive(Parser, Debug)]
pub struct Combos {
    /// JSON array of attack frame records
    #[arg(value_name = "FILE")]
    frames: PathBuf,

    /// Hide pairs that do not combo
    #[arg(long)]
    only_combos: bool,

    #[arg(long)]
    json: bool,
}

impl Combos {
    pub fn execute(self) -> Result<()> {
        let content = std::fs::read_to_string(&self.frames)
            .with_context(|| format!("Failed to read {}", self.frames.display()))?;
        let attacks: Vec<AttackFrames> =
            serde_json::from_str(&content).context("Failed to parse frame data")?;

        let pairs: Vec<_> = pair_attacks(&attacks)
            .into_iter()
            .filter(|pair| !self.only_combos || pair.kind != ComboKind::None)
            .collect();

        if self.json {
            return print_json(&pairs);
        }

        heading(&format!("{} attacks, {} pairs", attacks.len(), pairs.len()));
        for pair in &pairs {
            let kind = match pair.kind {
                ComboKind::True => style("true").green().bold(),
                ComboKind::Pseudo => style("pseudo").yellow(),
                ComboKind::None => style("none").dim(),
            };
            println!(
                "  {} → {}  gap {:>3}  {}",
                pair.first, pair.second, pair.gap, kind
            );
        }
        Ok(())
    }
}
