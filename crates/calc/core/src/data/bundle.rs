//! Root weapon data bundle.

use std::collections::{BTreeMap, BTreeSet};

use super::curve::CurveDefinition;
use super::error::{DataError, LookupError};
use super::keys::Affinity;
use super::reinforce::{ReinforceRates, SpEffect};
use super::weapon::{AffinityData, ResolvedWeapon};

/// Everything the weapon engines read, produced once by the data build.
///
/// Immutable for the lifetime of a calculation; pass it by reference into
/// every engine call.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrecomputedData {
    pub weapons: BTreeMap<String, ResolvedWeapon>,
    pub curves: BTreeMap<u32, CurveDefinition>,
    /// Reinforce table id → rates indexed by upgrade level.
    pub reinforce_rates: BTreeMap<u32, Vec<ReinforceRates>>,
    pub sp_effects: BTreeMap<u32, SpEffect>,
}

impl PrecomputedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_weapon(&mut self, weapon: ResolvedWeapon) {
        self.weapons.insert(weapon.name.clone(), weapon);
    }

    pub fn insert_curve(&mut self, curve: CurveDefinition) {
        self.curves.insert(curve.id, curve);
    }

    pub fn insert_sp_effect(&mut self, effect: SpEffect) {
        self.sp_effects.insert(effect.id, effect);
    }

    pub fn weapon(&self, name: &str) -> Result<&ResolvedWeapon, LookupError> {
        self.weapons
            .get(name)
            .ok_or_else(|| LookupError::WeaponNotFound(name.to_owned()))
    }

    /// Weapon plus the requested infusion.
    pub fn weapon_affinity(
        &self,
        name: &str,
        affinity: Affinity,
    ) -> Result<(&ResolvedWeapon, &AffinityData), LookupError> {
        let weapon = self.weapon(name)?;
        let data = weapon
            .affinity(affinity)
            .ok_or_else(|| LookupError::AffinityNotFound {
                weapon: name.to_owned(),
                affinity,
            })?;
        Ok((weapon, data))
    }

    pub fn curve(&self, id: u32) -> Result<&CurveDefinition, LookupError> {
        self.curves.get(&id).ok_or(LookupError::CurveNotFound(id))
    }

    pub fn reinforce(&self, table: u32, level: u32) -> Result<&ReinforceRates, LookupError> {
        let levels = self
            .reinforce_rates
            .get(&table)
            .ok_or(LookupError::ReinforceTableNotFound(table))?;
        levels
            .get(level as usize)
            .ok_or(LookupError::ReinforceLevelNotFound { table, level })
    }

    pub fn sp_effect(&self, id: u32) -> Result<&SpEffect, LookupError> {
        self.sp_effects
            .get(&id)
            .ok_or(LookupError::SpEffectNotFound(id))
    }

    /// Collect every dangling reference in the bundle.
    pub fn validate(&self) -> Vec<DataError> {
        let mut findings = Vec::new();

        for weapon in self.weapons.values() {
            for (&affinity, data) in &weapon.affinities {
                let missing: BTreeSet<u32> = data
                    .curve_ids()
                    .filter(|id| !self.curves.contains_key(id))
                    .collect();
                findings.extend(missing.into_iter().map(|curve_id| DataError::DanglingCurve {
                    weapon: weapon.name.clone(),
                    affinity,
                    curve_id,
                }));

                match self.reinforce_rates.get(&data.reinforce_type_id) {
                    None => findings.push(DataError::DanglingReinforceTable {
                        weapon: weapon.name.clone(),
                        affinity,
                        table: data.reinforce_type_id,
                    }),
                    Some(levels) if levels.len() <= weapon.max_upgrade_level as usize => {
                        findings.push(DataError::ShortReinforceTable {
                            weapon: weapon.name.clone(),
                            affinity,
                            table: data.reinforce_type_id,
                            max_level: weapon.max_upgrade_level,
                            last_level: levels.len().saturating_sub(1) as u32,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        for (&table, levels) in &self.reinforce_rates {
            for (level, rates) in levels.iter().enumerate() {
                for id in rates.sp_effect_ids.iter().flatten() {
                    if !self.sp_effects.contains_key(id) {
                        findings.push(DataError::DanglingSpEffect {
                            table,
                            level: level as u32,
                            sp_effect: *id,
                        });
                    }
                }
            }
        }

        findings
    }
}
