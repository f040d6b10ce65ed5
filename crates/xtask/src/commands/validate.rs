//! Bundle validation.

use anyhow::{Result, bail};
use calc_core::{CalcError, DataError};
use clap::Parser;
use console::style;

use crate::args::DataArgs;

/// Check data bundles for dangling references
#[derive(Parser, Debug)]
pub struct Validate {
    /// Skip the skill bundle
    #[arg(long)]
    weapons_only: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let factory = self.data.factory();

        let (weapons, mut findings) = factory.load_weapons()?;
        println!(
            "{} {} weapons, {} curves, {} reinforce tables",
            style("weapons:").bold().cyan(),
            weapons.weapons.len(),
            weapons.curves.len(),
            weapons.reinforce_rates.len()
        );

        if !self.weapons_only {
            let (aow, aow_findings) = factory.load_aow()?;
            println!(
                "{} {} sword arts",
                style("skills:").bold().cyan(),
                aow.sword_arts.len()
            );
            findings.extend(aow_findings);
        }

        if findings.is_empty() {
            println!("{}", style("✓ no dangling references").green().bold());
            return Ok(());
        }

        for finding in &findings {
            print_finding(finding);
        }
        bail!("{} dangling reference(s)", findings.len());
    }
}

fn print_finding(finding: &DataError) {
    println!(
        "  {} {} {}",
        style("✗").red().bold(),
        style(finding.error_code()).dim(),
        finding
    );
}
