//! Skill (Ash of War) data produced by the data build.

use std::collections::BTreeMap;

use super::error::{DataError, LookupError};
use super::keys::{Affinity, AttackAttribute, DamageTable, StatTable};
use super::weapon_type::WeaponType;

/// One hit of a sword art.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrecomputedAowAttack {
    pub name: String,
    /// Motion value per damage type, in percent of weapon AR.
    pub motion: DamageTable<f64>,
    /// Flat damage per type; for bullets this is the whole hit.
    pub flat: DamageTable<f64>,
    pub attack_attribute: AttackAttribute,
    /// Positive values reduce damage leaking through a guard.
    pub guard_cut_cancel_rate: f64,
    /// Bullet hit: damage comes from `flat` with its own scaling.
    pub is_add_base_atk: bool,
    /// Motion hit that also adds `flat` on top.
    pub adds_flat_to_motion: bool,
    /// Evaluate weapon AR one-handed for this hit.
    pub disable_two_hand_bonus: bool,
    pub final_damage_rate_id: Option<u32>,
    /// `-1` keeps the weapon's own scaling.
    pub overwrite_attack_element_correct_id: i32,
    pub stamina_motion: f64,
    pub stamina_flat: f64,
    pub poise_motion: f64,
    pub poise_flat: f64,
}

impl Default for PrecomputedAowAttack {
    fn default() -> Self {
        Self {
            name: String::new(),
            motion: DamageTable::default(),
            flat: DamageTable::default(),
            attack_attribute: AttackAttribute::default(),
            guard_cut_cancel_rate: 0.0,
            is_add_base_atk: false,
            adds_flat_to_motion: false,
            disable_two_hand_bonus: false,
            final_damage_rate_id: None,
            overwrite_attack_element_correct_id: -1,
            stamina_motion: 0.0,
            stamina_flat: 0.0,
            poise_motion: 0.0,
            poise_flat: 0.0,
        }
    }
}

impl PrecomputedAowAttack {
    pub fn motion(name: impl Into<String>, motion: DamageTable<f64>) -> Self {
        Self {
            name: name.into(),
            motion,
            ..Self::default()
        }
    }

    pub fn bullet(name: impl Into<String>, flat: DamageTable<f64>) -> Self {
        Self {
            name: name.into(),
            flat,
            is_add_base_atk: true,
            ..Self::default()
        }
    }

    pub fn element_correct_id(&self) -> Option<i32> {
        (self.overwrite_attack_element_correct_id >= 0)
            .then_some(self.overwrite_attack_element_correct_id)
    }
}

/// A weapon skill and its hits.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwordArt {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attacks: Vec<PrecomputedAowAttack>,
}

/// Bullet scaling for one stat and damage type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementCorrectEntry {
    pub enabled: bool,
    /// Replaces the weapon's scaling percent when set.
    pub override_percent: Option<f64>,
    pub curve_id: Option<u32>,
}

impl ElementCorrectEntry {
    pub const fn scaling(percent: f64) -> Self {
        Self {
            enabled: true,
            override_percent: Some(percent),
            curve_id: None,
        }
    }
}

/// Bullet stat-scaling override table (`AttackElementCorrectParam`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackElementCorrect {
    pub id: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: StatTable<DamageTable<ElementCorrectEntry>>,
}

/// PvP multiplier set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalDamageRate {
    pub id: u32,
    pub damage: DamageTable<f64>,
    pub stamina: f64,
    /// `saRate`: multiplier on poise damage.
    pub poise: f64,
}

impl FinalDamageRate {
    pub fn uniform(id: u32, rate: f64) -> Self {
        Self {
            id,
            damage: DamageTable::from_fn(|_| rate),
            stamina: rate,
            poise: rate,
        }
    }
}

bitflags::bitflags! {
    /// Infusions a gem may be applied with.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct AffinityFlags: u16 {
        const STANDARD = 1 << 0;
        const HEAVY = 1 << 1;
        const KEEN = 1 << 2;
        const QUALITY = 1 << 3;
        const FIRE = 1 << 4;
        const FLAME_ART = 1 << 5;
        const LIGHTNING = 1 << 6;
        const SACRED = 1 << 7;
        const MAGIC = 1 << 8;
        const COLD = 1 << 9;
        const POISON = 1 << 10;
        const BLOOD = 1 << 11;
        const OCCULT = 1 << 12;
    }
}

impl AffinityFlags {
    pub fn from_affinity(affinity: Affinity) -> Self {
        Self::from_bits_truncate(1 << affinity as u16)
    }

    pub fn allows(self, affinity: Affinity) -> bool {
        self.contains(Self::from_affinity(affinity))
    }
}

impl FromIterator<Affinity> for AffinityFlags {
    fn from_iter<I: IntoIterator<Item = Affinity>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |flags, a| flags | Self::from_affinity(a))
    }
}

/// Which weapons and infusions accept a gem (`EquipParamGem`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GemCompatibility {
    pub gem_id: u32,
    pub weapon_types: Vec<WeaponType>,
    pub affinities: AffinityFlags,
}

impl GemCompatibility {
    pub fn accepts(&self, weapon_type: WeaponType, affinity: Affinity) -> bool {
        self.weapon_types.contains(&weapon_type) && self.affinities.allows(affinity)
    }
}

/// Stat points a buff skill grants while active.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPointBonus {
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: StatTable<f64>,
}

/// Root skill bundle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrecomputedAowData {
    pub sword_arts: BTreeMap<u32, SwordArt>,
    pub attack_element_correct: BTreeMap<i32, AttackElementCorrect>,
    pub final_damage_rates: BTreeMap<u32, FinalDamageRate>,
    pub equip_param_gem: BTreeMap<u32, GemCompatibility>,
    /// Keyed by skill name.
    pub aow_stat_point_bonuses: BTreeMap<String, StatPointBonus>,
    pub sword_arts_id_to_gem_id: BTreeMap<u32, u32>,
    /// Skill name → sword art id.
    pub skill_names: BTreeMap<String, u32>,
}

impl PrecomputedAowData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_sword_art(&mut self, sword_art: SwordArt) {
        self.skill_names
            .insert(sword_art.name.clone(), sword_art.id);
        self.sword_arts.insert(sword_art.id, sword_art);
    }

    pub fn sword_art(&self, name: &str) -> Result<&SwordArt, LookupError> {
        self.skill_names
            .get(name)
            .and_then(|id| self.sword_arts.get(id))
            .ok_or_else(|| LookupError::SwordArtNotFound(name.to_owned()))
    }

    pub fn element_correct(&self, id: i32) -> Result<&AttackElementCorrect, LookupError> {
        self.attack_element_correct
            .get(&id)
            .ok_or(LookupError::ElementCorrectNotFound(id))
    }

    pub fn final_damage_rate(&self, id: u32) -> Result<&FinalDamageRate, LookupError> {
        self.final_damage_rates
            .get(&id)
            .ok_or(LookupError::FinalDamageRateNotFound(id))
    }

    pub fn stat_point_bonus(&self, skill: &str) -> Option<&StatPointBonus> {
        self.aow_stat_point_bonuses.get(skill)
    }

    /// Gem record for a sword art, if it is sold as an Ash of War.
    pub fn gem_for(&self, sword_art_id: u32) -> Option<&GemCompatibility> {
        self.sword_arts_id_to_gem_id
            .get(&sword_art_id)
            .and_then(|gem| self.equip_param_gem.get(gem))
    }

    /// Whether the skill can be put on this weapon class and infusion.
    ///
    /// Unique skills without a gem are never transferable.
    pub fn is_compatible(&self, skill: &str, weapon_type: WeaponType, affinity: Affinity) -> bool {
        self.skill_names
            .get(skill)
            .and_then(|id| self.gem_for(*id))
            .is_some_and(|gem| gem.accepts(weapon_type, affinity))
    }

    /// Names of every skill that fits the weapon class and infusion.
    pub fn compatible_sword_arts(&self, weapon_type: WeaponType, affinity: Affinity) -> Vec<&str> {
        self.sword_arts
            .values()
            .filter(|art| {
                self.gem_for(art.id)
                    .is_some_and(|gem| gem.accepts(weapon_type, affinity))
            })
            .map(|art| art.name.as_str())
            .collect()
    }

    /// Collect every dangling reference in the bundle.
    pub fn validate(&self) -> Vec<DataError> {
        let mut findings = Vec::new();

        for art in self.sword_arts.values() {
            for (hit, attack) in art.attacks.iter().enumerate() {
                if let Some(id) = attack
                    .element_correct_id()
                    .filter(|id| !self.attack_element_correct.contains_key(id))
                {
                    findings.push(DataError::DanglingSkillReference {
                        sword_art: art.name.clone(),
                        hit,
                        kind: "attack element correct",
                        id: i64::from(id),
                    });
                }
                if let Some(id) = attack
                    .final_damage_rate_id
                    .filter(|id| !self.final_damage_rates.contains_key(id))
                {
                    findings.push(DataError::DanglingSkillReference {
                        sword_art: art.name.clone(),
                        hit,
                        kind: "final damage rate",
                        id: i64::from(id),
                    });
                }
            }
        }

        for (name, &id) in &self.skill_names {
            if !self.sword_arts.contains_key(&id) {
                findings.push(DataError::DanglingSkillName {
                    name: name.clone(),
                    id,
                });
            }
        }

        findings
    }
}
