//! Guard stats.

use anyhow::{Context, Result};
use calc_core::{Affinity, round::round2, weapon::try_calculate_guard_stats};
use clap::Parser;

use crate::args::{DataArgs, heading, print_json, row};

/// Guard absorption and boost
#[derive(Parser, Debug)]
pub struct Guard {
    #[arg(value_name = "WEAPON")]
    weapon: String,

    #[arg(short, long, default_value = "Standard")]
    affinity: Affinity,

    #[arg(short, long, default_value_t = 0)]
    level: u32,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Guard {
    pub fn execute(self) -> Result<()> {
        let data = self.data.weapons()?;
        let guard = try_calculate_guard_stats(&data, &self.weapon, self.affinity, self.level)
            .with_context(|| format!("Cannot calculate guard stats for {}", self.weapon))?;

        if self.json {
            return print_json(&guard);
        }

        heading(&format!("{} +{} guard", self.weapon, self.level));
        for (damage_type, absorption) in guard.absorption.iter() {
            row(damage_type.as_ref(), format!("{}%", round2(*absorption)));
        }
        row("guard boost", round2(guard.guard_boost));
        row("status resist", round2(guard.status_resist));
        Ok(())
    }
}
