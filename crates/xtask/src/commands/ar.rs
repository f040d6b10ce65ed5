//! Attack Rating breakdown.

use anyhow::{Context, Result};
use calc_core::scaling::ChannelResult;
use calc_core::{
    Affinity, ArOptions, ArResult, Attribute, TableKey, calculate_critical, try_calculate_ar,
};
use clap::Parser;
use console::style;

use crate::args::{DataArgs, StatArgs, heading, print_json, row};

/// Attack Rating breakdown for one weapon
#[derive(Parser, Debug)]
pub struct Ar {
    /// Weapon name, e.g. "Rivers of Blood"
    #[arg(value_name = "WEAPON")]
    weapon: String,

    /// Infusion
    #[arg(short, long, default_value = "Standard")]
    affinity: Affinity,

    /// Upgrade level
    #[arg(short, long, default_value_t = 0)]
    level: u32,

    #[command(flatten)]
    stats: StatArgs,

    /// Hold the weapon in both hands
    #[arg(long)]
    two_handing: bool,

    /// Skip the requirement penalty
    #[arg(long)]
    ignore_requirements: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Ar {
    pub fn execute(self) -> Result<()> {
        let data = self.data.weapons()?;
        let options = ArOptions {
            two_handing: self.two_handing,
            ignore_requirements: self.ignore_requirements,
        };
        let stats = self.stats.stats();
        let ar = try_calculate_ar(&data, &self.weapon, self.affinity, self.level, &stats, options)
            .with_context(|| format!("Cannot calculate AR for {}", self.weapon))?;

        if self.json {
            return print_json(&ar);
        }

        let weapon = data.weapon(&self.weapon)?;
        print_summary(&ar, weapon.weapon_type.class_name());
        match calculate_critical(&ar, weapon) {
            Some(crit) => row(
                "critical",
                format!("{} (x{} at {})", crit.rounded, crit.multiplier, crit.critical_value),
            ),
            None => row("critical", style("-").dim()),
        }
        Ok(())
    }
}

fn print_summary(ar: &ArResult, class: Option<&str>) {
    heading(&format!("{} +{} ({})", ar.weapon, ar.upgrade_level, ar.affinity));
    if let Some(class) = class {
        row("class", class);
    }
    if !ar.requirements_met {
        println!("  {}", style("requirements not met").red());
    }

    for (damage_type, channel) in ar.damage.iter() {
        if let Some(channel) = channel {
            row(damage_type.as_ref(), channel_line(channel));
        }
    }
    row("total", style(ar.rounded).bold());

    for (effect, channel) in ar.status.iter() {
        if let Some(channel) = channel {
            row(effect.as_ref(), channel_line(channel));
        }
    }
    for (name, channel) in [("sorcery", &ar.sorcery), ("incantation", &ar.incantation)] {
        if let Some(channel) = channel {
            row(name, channel_line(channel));
        }
    }

    let grades: Vec<String> = Attribute::ALL
        .iter()
        .filter_map(|&a| ar.scaling_grades[a].map(|grade| format!("{a} {grade}")))
        .collect();
    if !grades.is_empty() {
        row("scaling", grades.join(", "));
    }
}

fn channel_line(channel: &ChannelResult) -> String {
    let sign = if channel.scaling < 0.0 { "-" } else { "+" };
    let mut line = format!(
        "{} ({:.1} {} {:.1})",
        channel.rounded,
        channel.base,
        sign,
        channel.scaling.abs()
    );
    if channel.penalized {
        line.push_str(" [penalized]");
    }
    line
}
