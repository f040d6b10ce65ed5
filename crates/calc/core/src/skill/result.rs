//! Skill engine inputs and outputs.

use crate::data::{Affinity, AttackAttribute, DamageTable};
use crate::stats::PlayerStats;

use super::value::SkillValue;

/// Everything one skill calculation needs besides the data bundles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AowCalculatorInput {
    pub weapon: String,
    pub affinity: Affinity,
    pub upgrade_level: u32,
    pub stats: PlayerStats,
    /// Skill name as listed in `skill_names`.
    pub sword_art: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub two_handing: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignore_requirements: bool,
    /// Apply PvP final damage rates.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pvp: bool,
}

impl AowCalculatorInput {
    pub fn new(
        weapon: impl Into<String>,
        affinity: Affinity,
        upgrade_level: u32,
        stats: PlayerStats,
        sword_art: impl Into<String>,
    ) -> Self {
        Self {
            weapon: weapon.into(),
            affinity,
            upgrade_level,
            stats,
            sword_art: sword_art.into(),
            two_handing: false,
            ignore_requirements: false,
            pvp: false,
        }
    }

    pub fn two_handed(mut self) -> Self {
        self.two_handing = true;
        self
    }

    pub fn ignoring_requirements(mut self) -> Self {
        self.ignore_requirements = true;
        self
    }

    pub fn in_pvp(mut self) -> Self {
        self.pvp = true;
        self
    }
}

/// One resolved hit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AowAttackResult {
    pub name: String,
    pub attack_attribute: AttackAttribute,
    /// Flat damage hit with its own scaling.
    pub is_bullet: bool,
    /// Damage per type; `None` where the hit deals none.
    pub damage: DamageTable<Option<SkillValue>>,
    pub total: SkillValue,
    pub stamina: f64,
    pub poise: f64,
    /// Change in guard chip damage, `-guard_cut_cancel_rate / 100`.
    pub shield_chip: f64,
}

/// Every hit of a skill on one weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AowCalculatorResult {
    pub sword_art: String,
    pub sword_art_id: u32,
    pub weapon: String,
    pub requirements_met: bool,
    pub attacks: Vec<AowAttackResult>,
}

impl AowCalculatorResult {
    /// Sum of every hit, or `Unavailable` when any hit is.
    pub fn total(&self) -> SkillValue {
        self.attacks.iter().try_fold(0.0, |acc, hit| hit.total.value().map(|v| acc + v))
            .map_or(SkillValue::Unavailable, SkillValue::Value)
    }
}
