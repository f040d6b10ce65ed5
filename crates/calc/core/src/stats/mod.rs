//! Character attributes.
//!
//! # Layers
//!
//! ```text
//! [ PlayerStats (raw) ]
//!      ↓  two-handing, weapon class
//! [ Effective stats ]  → curve evaluation, requirement checks
//! ```
//!
//! Only Strength differs between the two layers. Every STR-driven channel
//! (damage, status, spell scaling) reads the effective value.

use core::ops::{Index, IndexMut};

use crate::config::CalcConfig;
use crate::data::{Attribute, StatTable, TableKey, WeaponType};

/// Attribute levels of a character.
///
/// Ephemeral per-call value; no identity, no persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStats {
    pub str: i32,
    pub dex: i32,
    pub int: i32,
    pub fai: i32,
    pub arc: i32,
}

impl PlayerStats {
    pub const fn new(str: i32, dex: i32, int: i32, fai: i32, arc: i32) -> Self {
        Self {
            str,
            dex,
            int,
            fai,
            arc,
        }
    }

    /// Every attribute at the same level.
    pub const fn uniform(level: i32) -> Self {
        Self::new(level, level, level, level, level)
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self[attribute]
    }

    pub fn with(mut self, attribute: Attribute, level: i32) -> Self {
        self[attribute] = level;
        self
    }

    /// Sum of all five attributes.
    pub fn total(&self) -> i32 {
        self.str + self.dex + self.int + self.fai + self.arc
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(|&a| (a, self[a]))
    }

    /// Stats as seen by the scaling curves for this weapon.
    pub fn effective(&self, two_handing: bool, weapon_type: WeaponType, dual_blade: bool) -> Self {
        Self {
            str: compute_effective_strength(self.str, two_handing, weapon_type, dual_blade),
            ..*self
        }
    }

    /// Whether every level meets the matching requirement.
    pub fn meets(&self, requirements: &StatTable<i32>) -> bool {
        requirements.iter().all(|(a, &req)| self[a] >= req)
    }
}

impl Default for PlayerStats {
    /// Default stats: a fresh Wretch, all 10
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl Index<Attribute> for PlayerStats {
    type Output = i32;

    fn index(&self, attribute: Attribute) -> &i32 {
        match attribute {
            Attribute::Str => &self.str,
            Attribute::Dex => &self.dex,
            Attribute::Int => &self.int,
            Attribute::Fai => &self.fai,
            Attribute::Arc => &self.arc,
        }
    }
}

impl IndexMut<Attribute> for PlayerStats {
    fn index_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Str => &mut self.str,
            Attribute::Dex => &mut self.dex,
            Attribute::Int => &mut self.int,
            Attribute::Fai => &mut self.fai,
            Attribute::Arc => &mut self.arc,
        }
    }
}

impl From<StatTable<i32>> for PlayerStats {
    fn from(table: StatTable<i32>) -> Self {
        Self::new(
            table[Attribute::Str],
            table[Attribute::Dex],
            table[Attribute::Int],
            table[Attribute::Fai],
            table[Attribute::Arc],
        )
    }
}

impl From<PlayerStats> for StatTable<i32> {
    fn from(stats: PlayerStats) -> Self {
        StatTable::from_fn(|a| stats[a])
    }
}

/// Strength as used for scaling.
///
/// Two-handing (or a class that is always two-handed) multiplies Strength by
/// 1.5, floored and capped at 148. Fist weapons and dual blades keep raw
/// Strength.
pub fn compute_effective_strength(
    raw: i32,
    two_handing: bool,
    weapon_type: WeaponType,
    dual_blade: bool,
) -> i32 {
    let bonus = two_handing || weapon_type.is_always_two_handed();
    if !bonus || weapon_type.is_fist() || dual_blade {
        return raw;
    }

    let boosted = (f64::from(raw) * CalcConfig::TWO_HAND_STR_MULTIPLIER).min(CalcConfig::TWO_HAND_STR_CAP);
    boosted.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_handing_caps_at_148() {
        // 100 * 1.5 = 150 → cap
        assert_eq!(compute_effective_strength(100, true, WeaponType(0), false), 148);
        // 99 * 1.5 = 148.5 → cap, then floor
        assert_eq!(compute_effective_strength(99, true, WeaponType(0), false), 148);
        // 15 * 1.5 = 22.5 → floor
        assert_eq!(compute_effective_strength(15, true, WeaponType::STRAIGHT_SWORD, false), 22);
    }

    #[test]
    fn exceptions_keep_raw_strength() {
        assert_eq!(compute_effective_strength(40, true, WeaponType::FIST, false), 40);
        assert_eq!(compute_effective_strength(40, true, WeaponType::TWINBLADE, true), 40);
        assert_eq!(compute_effective_strength(40, false, WeaponType::STRAIGHT_SWORD, false), 40);
    }

    #[test]
    fn bows_always_get_the_bonus() {
        assert_eq!(compute_effective_strength(20, false, WeaponType::LIGHT_BOW, false), 30);
        assert_eq!(compute_effective_strength(20, false, WeaponType::GREATBOW, false), 30);
        assert_eq!(compute_effective_strength(20, false, WeaponType::CROSSBOW, false), 20);
    }

    #[test]
    fn effective_only_touches_strength() {
        let stats = PlayerStats::new(30, 20, 10, 10, 5);
        let effective = stats.effective(true, WeaponType::KATANA, false);
        assert_eq!(effective, PlayerStats::new(45, 20, 10, 10, 5));
    }

    #[test]
    fn requirements() {
        let reqs = StatTable::from_array([12, 18, 0, 0, 20]);
        assert!(!PlayerStats::new(12, 18, 1, 1, 19).meets(&reqs));
        assert!(PlayerStats::new(12, 18, 1, 1, 20).meets(&reqs));
    }
}
