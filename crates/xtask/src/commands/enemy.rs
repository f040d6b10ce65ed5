//! Enemy-facing damage.

use anyhow::Result;
use calc_core::{DamageType, EnemyDamageInput, calculate_enemy_damage, round::round_to};
use clap::Parser;
use console::style;

use crate::args::{heading, parse_typed_value, print_json, row};

/// Damage dealt to an enemy after defense and negation
#[derive(Parser, Debug)]
pub struct Enemy {
    /// Attack rating per type, e.g. `--ar physical=327 --ar fire=120`
    #[arg(long = "ar", value_name = "TYPE=VALUE", value_parser = parse_typed_value, required = true)]
    attack: Vec<(DamageType, f64)>,

    /// Target defense per type
    #[arg(long, value_name = "TYPE=VALUE", value_parser = parse_typed_value)]
    defense: Vec<(DamageType, f64)>,

    /// Target negation percent per type (negative = weakness)
    #[arg(long, value_name = "TYPE=VALUE", value_parser = parse_typed_value)]
    negation: Vec<(DamageType, f64)>,

    /// Motion value in percent
    #[arg(long, default_value_t = 100.0)]
    mv: f64,

    #[arg(long)]
    json: bool,
}

impl Enemy {
    pub fn execute(self) -> Result<()> {
        let mut input = EnemyDamageInput {
            attack: Default::default(),
            motion_value: self.mv,
            defense: Default::default(),
            negation: Default::default(),
        };
        for (damage_type, value) in self.attack {
            input.attack[damage_type] = value;
        }
        for (damage_type, value) in self.defense {
            input.defense[damage_type] = value;
        }
        for (damage_type, value) in self.negation {
            input.negation[damage_type] = value;
        }

        let result = calculate_enemy_damage(&input);
        if self.json {
            return print_json(&result);
        }

        heading("Enemy damage");
        for (damage_type, damage) in result.by_type.iter() {
            if input.attack[damage_type] > 0.0 {
                row(damage_type.as_ref(), round_to(*damage, 4));
            }
        }
        row("total", round_to(result.total, 4));
        row("displayed", style(result.rounded).bold());
        Ok(())
    }
}
