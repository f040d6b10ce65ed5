//! Skill (Ash of War) damage engine.
//!
//! Each hit is either a motion hit, scaled off the weapon's per-type AR, or a
//! bullet, whose flat damage scales on its own.
//!
//! # Formula
//!
//! ```text
//! motion  = (AR[type] + stat_point_bonus[type]) × mv[type] / 100  (+ flat)
//! bullet  = flat × (1 + 3 × pwu) × (1 + Σ percent × correct / 100 × curve)
//!           × skill_damage_multiplier
//! stamina = attack_base_stamina × reinforce.stamina_atk × mv / 100 + flat
//! poise   = poise_damage × reinforce.poise_atk × mv / 100 + flat
//! pvp     → × final damage rate (damage per type, stamina, saRate)
//! ```

use tracing::debug;

use crate::data::{
    AffinityData, DamageTable, DamageType, FinalDamageRate, LookupError, PrecomputedAowAttack,
    PrecomputedAowData, PrecomputedData, ReinforceRates, ResolvedWeapon, StatPointBonus,
};
use crate::round::{round3, round4};
use crate::scaling::{CurveCache, MemoCurveCache, effective_percent};
use crate::weapon::{ArCalculator, ArOptions, ArResult};

use super::bullet::{compute_bullet_damage, pwu_multiplier};
use super::result::{AowAttackResult, AowCalculatorInput, AowCalculatorResult};
use super::value::SkillValue;

/// Skill calculator sharing one curve cache with its AR engine.
pub struct SkillCalculator<'a, C: CurveCache = MemoCurveCache> {
    aow: &'a PrecomputedAowData,
    ar: ArCalculator<'a, C>,
}

impl<'a> SkillCalculator<'a, MemoCurveCache> {
    pub fn new(aow: &'a PrecomputedAowData, weapons: &'a PrecomputedData) -> Self {
        Self::with_cache(aow, weapons, MemoCurveCache::new())
    }
}

impl<'a, C: CurveCache> SkillCalculator<'a, C> {
    pub fn with_cache(aow: &'a PrecomputedAowData, weapons: &'a PrecomputedData, cache: C) -> Self {
        Self {
            aow,
            ar: ArCalculator::with_cache(weapons, cache),
        }
    }

    pub fn calculate(&mut self, input: &AowCalculatorInput) -> Result<AowCalculatorResult, LookupError> {
        let aow = self.aow;
        let sword_art = aow.sword_art(&input.sword_art)?;
        let (weapon, data, reinforce) =
            self.ar
                .lookup(&input.weapon, input.affinity, input.upgrade_level)?;
        let bonus = aow.stat_point_bonus(&sword_art.name);

        let mut attacks = Vec::with_capacity(sword_art.attacks.len());
        let mut requirements_met = true;
        for attack in &sword_art.attacks {
            let options = ArOptions {
                two_handing: input.two_handing && !attack.disable_two_hand_bonus,
                ignore_requirements: input.ignore_requirements,
            };
            let ar = self.ar.calculate_resolved(
                weapon,
                input.affinity,
                data,
                reinforce,
                input.upgrade_level,
                &input.stats,
                options,
            )?;
            let gated = !input.ignore_requirements && !ar.requirements_met;
            requirements_met &= !gated;

            let hit = HitContext {
                weapon,
                data,
                reinforce,
                ar: &ar,
                upgrade_level: input.upgrade_level,
            };
            let damage = if attack.is_add_base_atk {
                self.bullet_damage(&hit, attack)?
            } else {
                self.motion_damage(&hit, attack, bonus)?
            };

            let rate = match attack.final_damage_rate_id {
                Some(id) if input.pvp => Some(aow.final_damage_rate(id)?),
                _ => None,
            };
            attacks.push(finish_hit(&hit, attack, damage, rate, gated));
        }

        Ok(AowCalculatorResult {
            sword_art: sword_art.name.clone(),
            sword_art_id: sword_art.id,
            weapon: weapon.name.clone(),
            requirements_met,
            attacks,
        })
    }

    /// Motion hit: weapon AR per type (plus stat-point bonus) times motion value.
    fn motion_damage(
        &mut self,
        hit: &HitContext<'_>,
        attack: &PrecomputedAowAttack,
        bonus: Option<&StatPointBonus>,
    ) -> Result<DamageTable<f64>, LookupError> {
        let bonus = match bonus {
            Some(bonus) => self.stat_point_bonus(hit, bonus)?,
            None => DamageTable::default(),
        };

        Ok(DamageTable::from_fn(|t| {
            let ar = hit.ar.damage_total(t) + bonus[t];
            let flat = if attack.adds_flat_to_motion {
                attack.flat[t]
            } else {
                0.0
            };
            ar * attack.motion[t] / 100.0 + flat
        }))
    }

    /// `bonus[type] = Σ base[type] × curve(stat) × points[stat] / 100`
    /// over the stats scaling that type.
    fn stat_point_bonus(
        &mut self,
        hit: &HitContext<'_>,
        bonus: &StatPointBonus,
    ) -> Result<DamageTable<f64>, LookupError> {
        let mut table = DamageTable::<f64>::default();
        for (damage_type, channel) in hit.data.damage.iter() {
            let (Some(channel), Some(resolved)) = (channel, hit.ar.damage[damage_type].as_ref())
            else {
                continue;
            };
            for (attribute, scaling) in channel.scaling.iter() {
                let Some(scaling) = scaling else { continue };
                let points = bonus.points[attribute];
                if points == 0.0 {
                    continue;
                }
                let saturation = self
                    .ar
                    .resolver()
                    .saturation(scaling.curve_id, hit.ar.effective_stats[attribute])?;
                table[damage_type] += resolved.base * saturation * points / 100.0;
            }
        }
        Ok(table)
    }

    /// Bullet hit: flat damage with its own scaling.
    fn bullet_damage(
        &mut self,
        hit: &HitContext<'_>,
        attack: &PrecomputedAowAttack,
    ) -> Result<DamageTable<f64>, LookupError> {
        let multiplier = pwu_multiplier(hit.upgrade_level, hit.weapon.max_upgrade_level);
        let mut damage = DamageTable::<f64>::default();
        for (damage_type, &flat) in attack.flat.iter() {
            if flat == 0.0 {
                continue;
            }
            let contribution = self.bullet_contribution(hit, attack, damage_type)?;
            damage[damage_type] = compute_bullet_damage(flat, multiplier, contribution)
                * hit.weapon.skill_damage_multiplier;
        }
        Ok(damage)
    }

    /// `Σ percent × correct / 100 × saturation` for one damage type.
    ///
    /// Without an element-correct override the weapon's own scaling is used.
    /// With one, disabled entries are skipped and each entry's percent and
    /// curve fall back to the weapon's when unset.
    fn bullet_contribution(
        &mut self,
        hit: &HitContext<'_>,
        attack: &PrecomputedAowAttack,
        damage_type: DamageType,
    ) -> Result<f64, LookupError> {
        let stats = &hit.ar.effective_stats;
        let correct = &hit.reinforce.correct;
        let own = hit.data.damage[damage_type].as_ref().map(|c| &c.scaling);

        let Some(id) = attack.element_correct_id() else {
            let mut total = 0.0;
            for (attribute, scaling) in own.into_iter().flat_map(|table| table.iter()) {
                let Some(scaling) = scaling else { continue };
                let saturation = self
                    .ar
                    .resolver()
                    .saturation(scaling.curve_id, stats[attribute])?;
                total += effective_percent(scaling, correct[attribute]) / 100.0 * saturation;
            }
            return Ok(total);
        };

        let table = self.aow.element_correct(id)?;
        let mut total = 0.0;
        for (attribute, entries) in table.entries.iter() {
            let entry = entries[damage_type];
            if !entry.enabled {
                continue;
            }
            let weapon_scaling = own.and_then(|scaling| scaling[attribute]);
            let Some(percent) = entry
                .override_percent
                .or(weapon_scaling.map(|s| s.percent))
            else {
                continue;
            };
            let curve = entry.curve_id.or(weapon_scaling.map(|s| s.curve_id));
            let saturation = self
                .ar
                .resolver()
                .saturation_or_zero(curve, stats[attribute])?;
            total += percent * correct[attribute] / 100.0 * saturation;
        }
        Ok(total)
    }
}

/// Records shared by every step of one hit.
struct HitContext<'h> {
    weapon: &'h ResolvedWeapon,
    data: &'h AffinityData,
    reinforce: &'h ReinforceRates,
    ar: &'h ArResult,
    upgrade_level: u32,
}

fn finish_hit(
    hit: &HitContext<'_>,
    attack: &PrecomputedAowAttack,
    damage: DamageTable<f64>,
    rate: Option<&FinalDamageRate>,
    gated: bool,
) -> AowAttackResult {
    let weapon = hit.weapon;
    let mut stamina = weapon.attack_base_stamina * hit.reinforce.stamina_atk * attack.stamina_motion
        / 100.0
        + attack.stamina_flat;
    let mut poise =
        weapon.poise_damage * hit.reinforce.poise_atk * attack.poise_motion / 100.0 + attack.poise_flat;
    let mut damage = damage;
    if let Some(rate) = rate {
        damage = DamageTable::from_fn(|t| damage[t] * rate.damage[t]);
        stamina *= rate.stamina;
        poise *= rate.poise;
    }

    let to_value = |v: f64| {
        if gated {
            SkillValue::Unavailable
        } else {
            SkillValue::Value(round3(v))
        }
    };
    let total = to_value(damage.sum());
    let damage = damage.map(|_, &v| (v != 0.0).then(|| to_value(v)));

    AowAttackResult {
        name: attack.name.clone(),
        attack_attribute: attack.attack_attribute,
        is_bullet: attack.is_add_base_atk,
        damage,
        total,
        stamina: round3(stamina),
        poise: round3(poise),
        // `+ 0.0` folds -0.0 into 0.0
        shield_chip: round4(-attack.guard_cut_cancel_rate / 100.0) + 0.0,
    }
}

/// Skill damage, or `None` when anything it needs is missing.
pub fn calculate_skill(
    aow: &PrecomputedAowData,
    weapons: &PrecomputedData,
    input: &AowCalculatorInput,
) -> Option<AowCalculatorResult> {
    try_calculate_skill(aow, weapons, input)
        .inspect_err(|err| {
            debug!(
                sword_art = %input.sword_art,
                weapon = %input.weapon,
                error = %err,
                "skill damage unavailable"
            );
        })
        .ok()
}

/// [`calculate_skill`] with the reason it failed.
pub fn try_calculate_skill(
    aow: &PrecomputedAowData,
    weapons: &PrecomputedData,
    input: &AowCalculatorInput,
) -> Result<AowCalculatorResult, LookupError> {
    SkillCalculator::new(aow, weapons).calculate(input)
}
