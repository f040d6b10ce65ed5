//! Stat allocation search.

use std::cell::RefCell;

use anyhow::{Context, Result, bail};
use calc_core::{
    Affinity, AowCalculatorInput, ArCalculator, ArOptions, Attribute, PlayerStats, SkillCalculator,
    SolveOptions, StatConfig, StatTable, Strategy, TableKey, solve,
};
use clap::Parser;
use console::style;

use crate::args::{DataArgs, StatArgs, heading, print_json, row};

/// Best stat allocation for a point budget
#[derive(Parser, Debug)]
pub struct Optimize {
    #[arg(value_name = "WEAPON")]
    weapon: String,

    #[arg(short, long, default_value = "Standard")]
    affinity: Affinity,

    #[arg(short, long, default_value_t = 0)]
    level: u32,

    /// Starting stats
    #[command(flatten)]
    stats: StatArgs,

    /// Points to spend
    #[arg(short, long)]
    budget: i32,

    /// Stats the search may raise (default: every stat the weapon scales with)
    #[arg(long, value_delimiter = ',', value_name = "STAT,...")]
    free: Vec<Attribute>,

    /// Search strategy
    #[arg(long, default_value = "auto")]
    strategy: Strategy,

    /// Start from zero minimums and accept the requirement penalty
    #[arg(long)]
    ignore_requirements: bool,

    /// Optimize this skill's total instead of AR
    #[arg(long, value_name = "SKILL")]
    skill: Option<String>,

    #[arg(long)]
    two_handing: bool,

    #[arg(long)]
    json: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Optimize {
    pub fn execute(self) -> Result<()> {
        let weapons = self.data.weapons()?;
        let config = self.data.factory().load_config()?;
        let (weapon, affinity_data) = weapons.weapon_affinity(&self.weapon, self.affinity)?;

        let free: Vec<Attribute> = if self.free.is_empty() {
            Attribute::ALL
                .iter()
                .copied()
                .filter(|&a| affinity_data.stat_scaling[a] > 0.0)
                .collect()
        } else {
            self.free.clone()
        };
        if free.is_empty() {
            bail!("{} does not scale with any stat; pass --free", self.weapon);
        }

        let configs = if self.ignore_requirements {
            StatTable::<StatConfig>::default()
        } else {
            StatConfig::from_requirements(&weapon.requirements)
        };
        let options = SolveOptions::from_config(&config.optimizer).with_strategy(self.strategy);
        let base = self.stats.stats();
        let ar_options = ArOptions {
            two_handing: self.two_handing,
            ignore_requirements: self.ignore_requirements,
        };

        let solution = match &self.skill {
            None => {
                let calculator = RefCell::new(ArCalculator::new(&weapons));
                let objective = |stats: &PlayerStats| {
                    calculator
                        .borrow_mut()
                        .calculate(&self.weapon, self.affinity, self.level, stats, ar_options)
                        .map_or(0.0, |ar| ar.total)
                };
                solve(&base, &free, self.budget, &configs, objective, &options)
            }
            Some(skill) => {
                let aow = self.data.aow()?;
                aow.sword_art(skill)
                    .with_context(|| format!("Unknown skill {skill}"))?;
                let calculator = RefCell::new(SkillCalculator::new(&aow, &weapons));
                let objective = |stats: &PlayerStats| {
                    let input = AowCalculatorInput {
                        two_handing: self.two_handing,
                        ignore_requirements: self.ignore_requirements,
                        ..AowCalculatorInput::new(
                            &self.weapon,
                            self.affinity,
                            self.level,
                            *stats,
                            skill,
                        )
                    };
                    calculator
                        .borrow_mut()
                        .calculate(&input)
                        .ok()
                        .and_then(|result| result.total().value())
                        .unwrap_or(0.0)
                };
                solve(&base, &free, self.budget, &configs, objective, &options)
            }
        };

        if self.json {
            return print_json(&solution);
        }

        heading(&format!(
            "{} +{} ({} points, {})",
            self.weapon, self.level, self.budget, solution.strategy
        ));
        for attribute in Attribute::ALL {
            let before = base[*attribute];
            let after = solution.stats[*attribute];
            let change = if after > before {
                style(format!("{before} → {after}")).green().to_string()
            } else {
                after.to_string()
            };
            row(attribute.as_ref(), change);
        }
        row("objective", style(format!("{:.3}", solution.damage)).bold());
        row("evaluations", solution.evaluations);
        if solution.unspent > 0 {
            row("unspent", solution.unspent);
        }
        if !solution.minimums_met {
            println!("  {}", style("budget too small for requirements").red());
        }
        Ok(())
    }
}
