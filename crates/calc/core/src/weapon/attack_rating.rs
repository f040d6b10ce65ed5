//! Attack Rating engine.
//!
//! Runs the scaling resolver over every damage type, status buildup and spell
//! channel of one weapon + affinity + upgrade level for one set of stats.

use tracing::debug;

use crate::data::{
    Affinity, AffinityData, Attribute, BaseStatScaling, DamageTable, DamageType, LookupError,
    PrecomputedData, ReinforceRates, ResolvedWeapon, SpellKind, StatTable, StatusTable,
};
use crate::round::round_half_up;
use crate::scaling::{ChannelResult, CurveCache, MemoCurveCache, ScalingResolver, channel_penalized};
use crate::stats::PlayerStats;

use super::grade::ScalingGrade;

/// Situational modifiers for an AR calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArOptions {
    pub two_handing: bool,
    /// Skip the requirement penalty (build planning).
    pub ignore_requirements: bool,
}

impl ArOptions {
    pub const fn two_handed() -> Self {
        Self {
            two_handing: true,
            ignore_requirements: false,
        }
    }

    pub const fn ignoring_requirements(mut self) -> Self {
        self.ignore_requirements = true;
        self
    }
}

/// One damage type of an AR breakdown.
pub type DamageTypeResult = ChannelResult;
/// One status buildup of an AR breakdown.
pub type StatusResult = ChannelResult;
/// Catalyst spell buff (sorcery or incantation scaling).
pub type SpellScalingResult = ChannelResult;

/// Full Attack Rating breakdown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArResult {
    pub weapon: String,
    pub affinity: Affinity,
    pub upgrade_level: u32,
    /// Sum of every present damage type, unrounded.
    pub total: f64,
    pub rounded: i64,
    pub damage: DamageTable<Option<DamageTypeResult>>,
    pub status: StatusTable<Option<StatusResult>>,
    pub sorcery: Option<SpellScalingResult>,
    pub incantation: Option<SpellScalingResult>,
    /// Every posted requirement met by the effective stats.
    pub requirements_met: bool,
    /// Stats after the two-handed Strength bonus.
    pub effective_stats: PlayerStats,
    pub scaling_grades: StatTable<Option<ScalingGrade>>,
}

impl ArResult {
    /// Total of one damage type, `0.0` when the weapon has none.
    pub fn damage_total(&self, damage_type: DamageType) -> f64 {
        self.damage[damage_type]
            .as_ref()
            .map_or(0.0, |channel| channel.total)
    }

    pub fn spell(&self, kind: SpellKind) -> Option<&SpellScalingResult> {
        match kind {
            SpellKind::Sorcery => self.sorcery.as_ref(),
            SpellKind::Incantation => self.incantation.as_ref(),
        }
    }

    /// Per-type totals with absent types as zero.
    pub fn totals(&self) -> DamageTable<f64> {
        DamageTable::from_fn(|t| self.damage_total(t))
    }
}

/// Attack Rating calculator owning a curve cache.
///
/// Reuse one calculator across many calls (optimizer inner loops) to share
/// the cache; results do not depend on the cache implementation.
pub struct ArCalculator<'a, C: CurveCache = MemoCurveCache> {
    data: &'a PrecomputedData,
    cache: C,
}

impl<'a> ArCalculator<'a, MemoCurveCache> {
    pub fn new(data: &'a PrecomputedData) -> Self {
        Self::with_cache(data, MemoCurveCache::new())
    }
}

impl<'a, C: CurveCache> ArCalculator<'a, C> {
    pub fn with_cache(data: &'a PrecomputedData, cache: C) -> Self {
        Self { data, cache }
    }

    pub fn data(&self) -> &'a PrecomputedData {
        self.data
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub(crate) fn resolver(&mut self) -> ScalingResolver<'_, C> {
        ScalingResolver::new(&self.data.curves, &mut self.cache)
    }

    /// Look up the weapon, affinity and reinforcement level.
    pub fn lookup(
        &self,
        weapon_name: &str,
        affinity: Affinity,
        upgrade_level: u32,
    ) -> Result<(&'a ResolvedWeapon, &'a AffinityData, &'a ReinforceRates), LookupError> {
        let bundle: &'a PrecomputedData = self.data;
        let (weapon, data) = bundle.weapon_affinity(weapon_name, affinity)?;
        if upgrade_level > weapon.max_upgrade_level {
            return Err(LookupError::UpgradeLevelOutOfRange {
                level: upgrade_level,
                max: weapon.max_upgrade_level,
            });
        }
        let reinforce = bundle.reinforce(data.reinforce_type_id, upgrade_level)?;
        Ok((weapon, data, reinforce))
    }

    pub fn calculate(
        &mut self,
        weapon_name: &str,
        affinity: Affinity,
        upgrade_level: u32,
        stats: &PlayerStats,
        options: ArOptions,
    ) -> Result<ArResult, LookupError> {
        let (weapon, data, reinforce) = self.lookup(weapon_name, affinity, upgrade_level)?;
        self.calculate_resolved(weapon, affinity, data, reinforce, upgrade_level, stats, options)
    }

    /// Calculate against records that are already looked up.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate_resolved(
        &mut self,
        weapon: &ResolvedWeapon,
        affinity: Affinity,
        data: &AffinityData,
        reinforce: &ReinforceRates,
        upgrade_level: u32,
        stats: &PlayerStats,
        options: ArOptions,
    ) -> Result<ArResult, LookupError> {
        let effective = stats.effective(options.two_handing, weapon.weapon_type, weapon.dual_blade);
        let requirements = &weapon.requirements;
        let penalized = |scaling: &StatTable<Option<BaseStatScaling>>| {
            !options.ignore_requirements
                && channel_penalized(scaling_stats(scaling).iter(), &effective, requirements)
        };

        // ===== damage types =====
        let mut damage = DamageTable::<Option<DamageTypeResult>>::default();
        for (damage_type, channel) in data.damage.iter() {
            let Some(channel) = channel else { continue };
            let base = channel.attack_base * reinforce.attack[damage_type];
            let result = self.resolver().resolve(
                base,
                &channel.scaling,
                &reinforce.correct,
                &effective,
                penalized(&channel.scaling),
            )?;
            damage[damage_type] = Some(result);
        }

        // ===== status buildup =====
        let mut status = StatusTable::<Option<StatusResult>>::default();
        for (effect, record) in data.status.iter() {
            let Some(record) = record else { continue };

            let base = match record.sp_effect_slot {
                Some(slot) => match reinforce.sp_effect_ids.get(slot).copied().flatten() {
                    // Not unlocked at this level
                    None => continue,
                    Some(id) => self.data.sp_effect(id)?.buildup[effect],
                },
                None => record.base_value,
            };
            if base <= 0.0 {
                continue;
            }

            let result = match &record.scaling {
                Some(scaling) => {
                    let attribute = scaling.attribute;
                    let penalty = !options.ignore_requirements
                        && effective[attribute] < requirements[attribute];
                    let entry = BaseStatScaling {
                        percent: scaling.percent,
                        curve_id: scaling.curve_id,
                        is_override: scaling.is_override,
                    };
                    self.resolver().resolve_single(
                        base,
                        attribute,
                        &entry,
                        reinforce.correct[attribute],
                        &effective,
                        penalty,
                    )?
                }
                None => ChannelResult::flat(base),
            };
            status[effect] = Some(result);
        }

        // ===== spell scaling =====
        let mut spells = [None, None];
        for (slot, kind) in [SpellKind::Sorcery, SpellKind::Incantation].into_iter().enumerate() {
            let Some(record) = data.spell(kind) else { continue };
            spells[slot] = Some(self.resolver().resolve(
                record.base,
                &record.scaling,
                &reinforce.correct,
                &effective,
                penalized(&record.scaling),
            )?);
        }
        let [sorcery, incantation] = spells;

        let total: f64 = damage.values().iter().flatten().map(|c| c.total).sum();
        let scaling_grades =
            StatTable::from_fn(|a| ScalingGrade::from_percent(data.stat_scaling[a] * reinforce.correct[a]));

        Ok(ArResult {
            weapon: weapon.name.clone(),
            affinity,
            upgrade_level,
            total,
            rounded: round_half_up(total),
            damage,
            status,
            sorcery,
            incantation,
            requirements_met: effective.meets(requirements),
            effective_stats: effective,
            scaling_grades,
        })
    }
}

/// Stats that scale a channel.
fn scaling_stats(scaling: &StatTable<Option<BaseStatScaling>>) -> Vec<Attribute> {
    scaling
        .iter()
        .filter(|(_, entry)| entry.is_some())
        .map(|(attribute, _)| attribute)
        .collect()
}

/// Attack Rating, or `None` when anything it needs is missing.
pub fn calculate_ar(
    data: &PrecomputedData,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: ArOptions,
) -> Option<ArResult> {
    try_calculate_ar(data, weapon_name, affinity, upgrade_level, stats, options)
        .inspect_err(|err| {
            debug!(
                weapon = weapon_name,
                %affinity,
                upgrade_level,
                error = %err,
                "attack rating unavailable"
            );
        })
        .ok()
}

/// [`calculate_ar`] with the reason it failed.
pub fn try_calculate_ar(
    data: &PrecomputedData,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: ArOptions,
) -> Result<ArResult, LookupError> {
    ArCalculator::new(data).calculate(weapon_name, affinity, upgrade_level, stats, options)
}

/// Total AR only, for objective functions and list views.
pub fn calculate_weapon_ar(
    data: &PrecomputedData,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: ArOptions,
) -> Option<f64> {
    calculate_ar(data, weapon_name, affinity, upgrade_level, stats, options).map(|ar| ar.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StatusEffect;
    use crate::fixtures;
    use crate::scaling::NoCurveCache;

    #[test]
    fn unknown_inputs_fail_closed() {
        let data = fixtures::weapon_data();
        let stats = PlayerStats::default();
        let opts = ArOptions::default();

        assert!(calculate_ar(&data, "Nope", Affinity::Standard, 0, &stats, opts).is_none());
        assert!(
            calculate_ar(&data, fixtures::RIVERS_OF_BLOOD, Affinity::Heavy, 0, &stats, opts)
                .is_none()
        );
        assert_eq!(
            try_calculate_ar(&data, fixtures::RIVERS_OF_BLOOD, Affinity::Standard, 11, &stats, opts)
                .unwrap_err(),
            LookupError::UpgradeLevelOutOfRange { level: 11, max: 10 }
        );
    }

    #[test]
    fn dangling_curve_fails_closed() {
        let mut data = fixtures::weapon_data();
        data.curves.remove(&fixtures::CURVE_PHYSICAL);
        let stats = PlayerStats::default();
        assert_eq!(
            try_calculate_ar(&data, fixtures::LORDSWORN, Affinity::Standard, 0, &stats, ArOptions::default())
                .unwrap_err(),
            LookupError::CurveNotFound(fixtures::CURVE_PHYSICAL)
        );
    }

    #[test]
    fn dangling_reinforce_level_fails_closed() {
        let mut data = fixtures::weapon_data();
        if let Some(levels) = data.reinforce_rates.get_mut(&fixtures::REINFORCE_STANDARD) {
            levels.truncate(10);
        }
        let stats = PlayerStats::default();
        assert!(
            calculate_ar(&data, fixtures::LORDSWORN, Affinity::Standard, 9, &stats, ArOptions::default())
                .is_some()
        );
        assert!(
            calculate_ar(&data, fixtures::LORDSWORN, Affinity::Standard, 10, &stats, ArOptions::default())
                .is_none()
        );
    }

    #[test]
    fn rivers_of_blood_bleed_penalty() {
        let data = fixtures::weapon_data();
        let stats = PlayerStats::new(12, 18, 9, 8, 5);

        let ar = calculate_ar(&data, fixtures::RIVERS_OF_BLOOD, Affinity::Standard, 10, &stats, ArOptions::default())
            .unwrap();
        let bleed = ar.status[StatusEffect::Bleed].as_ref().unwrap();
        // 50 * 0.6, requirement ARC 20 unmet
        assert_eq!(bleed.rounded, 30);
        assert!(bleed.penalized);
        assert!(!ar.requirements_met);

        let ar = calculate_ar(
            &data,
            fixtures::RIVERS_OF_BLOOD,
            Affinity::Standard,
            10,
            &stats,
            ArOptions::default().ignoring_requirements(),
        )
        .unwrap();
        let bleed = ar.status[StatusEffect::Bleed].as_ref().unwrap();
        assert_eq!(bleed.rounded, 50);
        assert!(!bleed.penalized);
    }

    #[test]
    fn penalty_is_per_channel() {
        let data = fixtures::weapon_data();
        // STR and DEX met, ARC short: only the ARC-scaled channels drop
        let stats = PlayerStats::new(12, 18, 9, 8, 5);
        let ar = calculate_ar(&data, fixtures::RIVERS_OF_BLOOD, Affinity::Standard, 10, &stats, ArOptions::default())
            .unwrap();
        let physical = ar.damage[DamageType::Physical].as_ref().unwrap();
        let fire = ar.damage[DamageType::Fire].as_ref().unwrap();
        assert!(!physical.penalized);
        assert!(fire.penalized);
        assert!((fire.total - fire.base * 0.6).abs() < 1e-9);
    }

    #[test]
    fn absent_types_are_excluded() {
        let data = fixtures::weapon_data();
        let ar = calculate_ar(
            &data,
            fixtures::LORDSWORN,
            Affinity::Standard,
            25,
            &PlayerStats::new(20, 20, 10, 10, 10),
            ArOptions::default(),
        )
        .unwrap();
        assert!(ar.damage[DamageType::Physical].is_some());
        assert!(ar.damage[DamageType::Magic].is_none());
        assert!((ar.total - ar.damage_total(DamageType::Physical)).abs() < 1e-12);
        assert!(ar.sorcery.is_none());
    }

    #[test]
    fn two_handing_feeds_strength() {
        let data = fixtures::weapon_data();
        let stats = PlayerStats::new(30, 20, 10, 10, 10);
        let one = calculate_ar(&data, fixtures::LORDSWORN, Affinity::Standard, 25, &stats, ArOptions::default())
            .unwrap();
        let two = calculate_ar(&data, fixtures::LORDSWORN, Affinity::Standard, 25, &stats, ArOptions::two_handed())
            .unwrap();
        assert_eq!(two.effective_stats.str, 45);
        assert!(two.total > one.total);
    }

    #[test]
    fn bows_always_two_hand_and_fists_never() {
        let data = fixtures::weapon_data();
        let stats = PlayerStats::new(30, 30, 10, 10, 10);
        let bow = calculate_ar(&data, fixtures::SHORTBOW, Affinity::Standard, 0, &stats, ArOptions::default())
            .unwrap();
        assert_eq!(bow.effective_stats.str, 45);

        let fist = calculate_ar(&data, fixtures::CAESTUS, Affinity::Standard, 0, &stats, ArOptions::two_handed())
            .unwrap();
        assert_eq!(fist.effective_stats.str, 30);

        let paired = calculate_ar(&data, fixtures::TWINNED_SWORDS, Affinity::Standard, 0, &stats, ArOptions::two_handed())
            .unwrap();
        assert_eq!(paired.effective_stats.str, 30);
    }

    #[test]
    fn catalyst_spell_scaling() {
        let data = fixtures::weapon_data();
        let low = calculate_ar(
            &data,
            fixtures::GLINTSTONE_STAFF,
            Affinity::Standard,
            0,
            &PlayerStats::new(10, 10, 20, 10, 10),
            ArOptions::default(),
        )
        .unwrap();
        let high = calculate_ar(
            &data,
            fixtures::GLINTSTONE_STAFF,
            Affinity::Standard,
            0,
            &PlayerStats::new(10, 10, 60, 10, 10),
            ArOptions::default(),
        )
        .unwrap();
        let (low, high) = (low.sorcery.unwrap(), high.sorcery.unwrap());
        assert!((low.base - 100.0).abs() < 1e-12);
        assert!(high.total > low.total);

        let seal = calculate_ar(
            &data,
            fixtures::FINGER_SEAL,
            Affinity::Standard,
            0,
            &PlayerStats::new(10, 10, 10, 20, 10),
            ArOptions::default(),
        )
        .unwrap();
        assert!(seal.incantation.is_some());
        assert!(seal.sorcery.is_none());
    }

    #[test]
    fn grades_follow_reinforcement() {
        let data = fixtures::weapon_data();
        let ar = calculate_ar(
            &data,
            fixtures::LORDSWORN,
            Affinity::Heavy,
            25,
            &PlayerStats::default(),
            ArOptions::default(),
        )
        .unwrap();
        assert!(ar.scaling_grades[Attribute::Str].is_some());
        assert_eq!(ar.scaling_grades[Attribute::Arc], None);
    }

    #[test]
    fn cache_does_not_change_results() {
        let data = fixtures::weapon_data();
        let stats = PlayerStats::new(40, 25, 10, 10, 10);
        let mut memo = ArCalculator::new(&data);
        let mut plain = ArCalculator::with_cache(&data, NoCurveCache);

        let first = memo
            .calculate(fixtures::LORDSWORN, Affinity::Standard, 25, &stats, ArOptions::two_handed())
            .unwrap();
        let second = memo
            .calculate(fixtures::LORDSWORN, Affinity::Standard, 25, &stats, ArOptions::two_handed())
            .unwrap();
        let uncached = plain
            .calculate(fixtures::LORDSWORN, Affinity::Standard, 25, &stats, ArOptions::two_handed())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first, uncached);
        assert!(!memo.cache().is_empty());
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::fixtures;
    use crate::scaling::NoCurveCache;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn repeated_calls_are_identical(
            levels in prop::array::uniform5(1i32..=99),
            upgrade in 0u32..=10,
            two_handing in any::<bool>(),
        ) {
            let data = fixtures::weapon_data();
            let [str, dex, int, fai, arc] = levels;
            let stats = PlayerStats::new(str, dex, int, fai, arc);
            let options = ArOptions { two_handing, ignore_requirements: false };

            let mut memo = ArCalculator::new(&data);
            let first = memo.calculate(fixtures::RIVERS_OF_BLOOD, Affinity::Standard, upgrade, &stats, options);
            let second = memo.calculate(fixtures::RIVERS_OF_BLOOD, Affinity::Standard, upgrade, &stats, options);
            let uncached = ArCalculator::with_cache(&data, NoCurveCache)
                .calculate(fixtures::RIVERS_OF_BLOOD, Affinity::Standard, upgrade, &stats, options);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&first, &uncached);
            prop_assert!(first.is_ok());
        }
    }
}
