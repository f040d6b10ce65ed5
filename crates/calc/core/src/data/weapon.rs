//! Per-weapon and per-affinity records produced by the data build.

use std::collections::BTreeMap;

use super::keys::{Affinity, AttackAttribute, Attribute, SpellKind};
use super::keys::{DamageTable, StatTable, StatusTable};
use super::weapon_type::WeaponType;

/// Scaling of one damage channel by one attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStatScaling {
    /// Scaling percent before reinforcement (e.g. 45.0 for a D/C grade).
    pub percent: f64,
    pub curve_id: u32,
    /// When set, `percent` is final and the reinforcement rate is skipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_override: bool,
}

impl BaseStatScaling {
    pub const fn new(percent: f64, curve_id: u32) -> Self {
        Self {
            percent,
            curve_id,
            is_override: false,
        }
    }

    pub const fn overriding(percent: f64, curve_id: u32) -> Self {
        Self {
            percent,
            curve_id,
            is_override: true,
        }
    }
}

/// Base attack of one damage channel plus the stats that scale it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseDamageType {
    pub attack_base: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: StatTable<Option<BaseStatScaling>>,
}

impl BaseDamageType {
    pub fn new(attack_base: f64) -> Self {
        Self {
            attack_base,
            scaling: StatTable::default(),
        }
    }

    /// Builder: add scaling by `attribute`.
    pub fn with_scaling(mut self, attribute: Attribute, scaling: BaseStatScaling) -> Self {
        self.scaling[attribute] = Some(scaling);
        self
    }
}

/// Scaling of a status buildup by a single attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusScaling {
    pub attribute: Attribute,
    pub percent: f64,
    pub curve_id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_override: bool,
}

/// Status buildup carried by a weapon affinity.
///
/// The base either comes from `base_value` or, when `sp_effect_slot` is set,
/// from the special effect the reinforcement level unlocks in that slot. A
/// slot with no effect at the current level means the buildup is not active
/// yet (level-gated effects such as frost on cold infusions).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffectRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sp_effect_slot: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: Option<StatusScaling>,
}

/// Catalyst spell scaling (sorcery or incantation).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellScalingRecord {
    /// Spell buff before attribute scaling, normally 100.
    pub base: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scaling: StatTable<Option<BaseStatScaling>>,
}

/// Guard record: block absorption per damage type and guard boost.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardData {
    /// Percent of each damage type absorbed while blocking.
    pub cut_rate: DamageTable<f64>,
    pub guard_boost: f64,
    /// Status resistance while blocking, flat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_resist: f64,
}

/// Everything that differs between infusions of the same weapon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityData {
    /// Internal weapon id of this infusion.
    pub id: u32,
    /// Key into [`PrecomputedData::reinforce_rates`](super::PrecomputedData::reinforce_rates).
    pub reinforce_type_id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: DamageTable<Option<BaseDamageType>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: StatusTable<Option<StatusEffectRecord>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sorcery: Option<SpellScalingRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub incantation: Option<SpellScalingRecord>,
    /// Flattened scaling percent per stat, used for grades and filtering.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_scaling: StatTable<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guard: Option<GuardData>,
}

impl AffinityData {
    pub fn spell(&self, kind: SpellKind) -> Option<&SpellScalingRecord> {
        match kind {
            SpellKind::Sorcery => self.sorcery.as_ref(),
            SpellKind::Incantation => self.incantation.as_ref(),
        }
    }

    /// Curve ids referenced anywhere in this record.
    pub fn curve_ids(&self) -> impl Iterator<Item = u32> + '_ {
        let damage = self
            .damage
            .values()
            .iter()
            .flatten()
            .flat_map(|channel| channel.scaling.values().iter().flatten())
            .map(|scaling| scaling.curve_id);
        let status = self
            .status
            .values()
            .iter()
            .flatten()
            .filter_map(|record| record.scaling.map(|scaling| scaling.curve_id));
        let spells = self
            .sorcery
            .iter()
            .chain(self.incantation.iter())
            .flat_map(|record| record.scaling.values().iter().flatten())
            .map(|scaling| scaling.curve_id);
        damage.chain(status).chain(spells)
    }
}

/// A weapon with all of its infusions, keyed by name in the bundle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedWeapon {
    pub name: String,
    pub weapon_type: WeaponType,
    pub max_upgrade_level: u32,
    /// Paired weapons (dual blades) never get the two-handed Strength bonus.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dual_blade: bool,
    /// Stamina spent per light attack.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stamina_cost: f64,
    /// Multiplier applied to skill bullet damage.
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub skill_damage_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_attribute: AttackAttribute,
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary_attribute: Option<AttackAttribute>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: StatTable<i32>,
    /// Added to 100 to get the weapon's critical value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub throw_atk_rate: i32,
    /// Stamina damage dealt to a guarding target before motion values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_base_stamina: f64,
    /// Poise damage before motion values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub poise_damage: f64,
    pub affinities: BTreeMap<Affinity, AffinityData>,
}

impl ResolvedWeapon {
    pub fn affinity(&self, affinity: Affinity) -> Option<&AffinityData> {
        self.affinities.get(&affinity)
    }
}

#[cfg(feature = "serde")]
fn one() -> f64 {
    1.0
}
