use super::keys::{DamageTable, StatTable, StatusEffect, StatusTable};

/// Reinforcement rates for one upgrade level of one reinforce table.
///
/// Every rate multiplies the matching base value; `1.0` means unchanged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReinforceRates {
    /// Multiplier on each damage type's attack base.
    pub attack: DamageTable<f64>,
    /// Multiplier on each stat's scaling percent.
    pub correct: StatTable<f64>,
    pub stamina_atk: f64,
    pub poise_atk: f64,
    /// Multiplier on guard absorption per damage type.
    pub guard_cut: DamageTable<f64>,
    pub guard_boost: f64,
    /// Special effects unlocked at this level, by slot.
    pub sp_effect_ids: [Option<u32>; 2],
}

impl ReinforceRates {
    /// Rates of a `+0` weapon: everything unchanged.
    pub fn identity() -> Self {
        Self {
            attack: DamageTable::from_fn(|_| 1.0),
            correct: StatTable::from_fn(|_| 1.0),
            stamina_atk: 1.0,
            poise_atk: 1.0,
            guard_cut: DamageTable::from_fn(|_| 1.0),
            guard_boost: 1.0,
            sp_effect_ids: [None, None],
        }
    }

    /// Uniform attack/correct growth, handy for building tables.
    pub fn uniform(attack: f64, correct: f64) -> Self {
        Self {
            attack: DamageTable::from_fn(|_| attack),
            correct: StatTable::from_fn(|_| correct),
            ..Self::identity()
        }
    }

    pub fn with_sp_effect(mut self, slot: usize, id: u32) -> Self {
        if let Some(entry) = self.sp_effect_ids.get_mut(slot) {
            *entry = Some(id);
        }
        self
    }
}

impl Default for ReinforceRates {
    fn default() -> Self {
        Self::identity()
    }
}

/// Special effect record; only the status buildup it grants matters here.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpEffect {
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buildup: StatusTable<f64>,
}

impl SpEffect {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            buildup: StatusTable::default(),
        }
    }

    pub fn with_buildup(mut self, effect: StatusEffect, value: f64) -> Self {
        self.buildup[effect] = value;
        self
    }
}
