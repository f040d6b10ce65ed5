//! Skill damage per hit.

use anyhow::{Context, Result};
use calc_core::{Affinity, AowCalculatorInput, try_calculate_skill};
use clap::Parser;
use console::style;

use crate::args::{DataArgs, StatArgs, heading, print_json, row};

/// Skill (Ash of War) damage per hit
#[derive(Parser, Debug)]
pub struct Skill {
    #[arg(value_name = "WEAPON")]
    weapon: String,

    /// Skill name, e.g. "Lion's Claw"
    #[arg(value_name = "SKILL")]
    skill: String,

    #[arg(short, long, default_value = "Standard")]
    affinity: Affinity,

    #[arg(short, long, default_value_t = 0)]
    level: u32,

    #[command(flatten)]
    stats: StatArgs,

    #[arg(long)]
    two_handing: bool,

    #[arg(long)]
    ignore_requirements: bool,

    /// Apply PvP damage rates
    #[arg(long)]
    pvp: bool,

    #[arg(long)]
    json: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Skill {
    pub fn execute(self) -> Result<()> {
        let weapons = self.data.weapons()?;
        let aow = self.data.aow()?;

        let input = AowCalculatorInput {
            two_handing: self.two_handing,
            ignore_requirements: self.ignore_requirements,
            pvp: self.pvp,
            ..AowCalculatorInput::new(
                &self.weapon,
                self.affinity,
                self.level,
                self.stats.stats(),
                &self.skill,
            )
        };
        let result = try_calculate_skill(&aow, &weapons, &input)
            .with_context(|| format!("Cannot calculate {} on {}", self.skill, self.weapon))?;

        if self.json {
            return print_json(&result);
        }

        heading(&format!("{} on {} +{}", result.sword_art, result.weapon, self.level));
        if !result.requirements_met {
            println!("  {}", style("requirements not met").red());
        }
        for hit in &result.attacks {
            let kind = if hit.is_bullet { "bullet" } else { "motion" };
            println!("  {} {}", style(&hit.name).bold(), style(kind).dim());
            for (damage_type, value) in hit.damage.iter() {
                if let Some(value) = value {
                    row(damage_type.as_ref(), value);
                }
            }
            row("total", style(hit.total).bold());
            row("stamina", hit.stamina);
            row("poise", hit.poise);
            if hit.shield_chip != 0.0 {
                row("shield chip", hit.shield_chip);
            }
        }
        row("skill total", style(result.total()).bold());
        Ok(())
    }
}
