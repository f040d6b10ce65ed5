//! Combines a channel's base value with per-stat scaling.
//!
//! One "channel" is anything that scales like weapon damage: a damage type, a
//! status buildup or a catalyst's spell buff.

use std::collections::BTreeMap;

use tracing::trace;

use crate::config::CalcConfig;
use crate::data::{Attribute, BaseStatScaling, CurveDefinition, LookupError, StatTable};
use crate::round::round_half_up;
use crate::stats::PlayerStats;

use super::cache::CurveCache;
use super::curve::evaluate_curve;

/// Resolved value of one scaling channel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelResult {
    /// Base value after reinforcement.
    pub base: f64,
    /// Sum of stat contributions; negative when the penalty applies.
    pub scaling: f64,
    pub total: f64,
    /// `total` rounded half up, as displayed.
    pub rounded: i64,
    /// Contribution of each stat (zero when penalized).
    pub per_stat: StatTable<f64>,
    /// Requirement penalty applied.
    pub penalized: bool,
}

impl ChannelResult {
    /// A channel with no stat scaling at all.
    pub fn flat(base: f64) -> Self {
        Self::from_parts(base, StatTable::default(), false)
    }

    fn from_parts(base: f64, per_stat: StatTable<f64>, penalized: bool) -> Self {
        let (scaling, per_stat) = if penalized {
            (
                base * CalcConfig::REQUIREMENT_PENALTY - base,
                StatTable::default(),
            )
        } else {
            (per_stat.sum(), per_stat)
        };
        let total = base + scaling;
        Self {
            base,
            scaling,
            total,
            rounded: round_half_up(total),
            per_stat,
            penalized,
        }
    }
}

/// Percent after reinforcement.
///
/// Overrides are final; everything else is multiplied by the level's
/// correction rate for that stat.
pub fn effective_percent(scaling: &BaseStatScaling, correct_rate: f64) -> f64 {
    if scaling.is_override {
        scaling.percent
    } else {
        scaling.percent * correct_rate
    }
}

/// `(percent / 100) * saturation * base`, unrounded.
pub fn stat_contribution(percent: f64, saturation: f64, base: f64) -> f64 {
    percent / 100.0 * saturation * base
}

/// Curve lookups for one engine call, memoised through a [`CurveCache`].
pub struct ScalingResolver<'a, C: CurveCache> {
    curves: &'a BTreeMap<u32, CurveDefinition>,
    cache: &'a mut C,
}

impl<'a, C: CurveCache> ScalingResolver<'a, C> {
    pub fn new(curves: &'a BTreeMap<u32, CurveDefinition>, cache: &'a mut C) -> Self {
        Self { curves, cache }
    }

    /// Saturation of `curve_id` at `level`.
    ///
    /// A curve id that is not in the bundle is an error here: the record
    /// that named it is broken and the caller fails closed.
    pub fn saturation(&mut self, curve_id: u32, level: i32) -> Result<f64, LookupError> {
        if let Some(hit) = self.cache.get(curve_id, level) {
            return Ok(hit);
        }

        let curve = self
            .curves
            .get(&curve_id)
            .ok_or(LookupError::CurveNotFound(curve_id))?;
        let value = evaluate_curve(Some(curve), f64::from(level));
        trace!(curve_id, level, value, "curve evaluated");

        self.cache.set(curve_id, level, value);
        Ok(value)
    }

    /// Saturation for an optional curve: no curve means no scaling.
    pub fn saturation_or_zero(
        &mut self,
        curve_id: Option<u32>,
        level: i32,
    ) -> Result<f64, LookupError> {
        match curve_id {
            Some(id) => self.saturation(id, level),
            None => Ok(0.0),
        }
    }

    /// Resolve a channel scaled by any subset of the five stats.
    ///
    /// `stats` must already be effective (two-handed Strength applied).
    pub fn resolve(
        &mut self,
        base: f64,
        scaling: &StatTable<Option<BaseStatScaling>>,
        correct: &StatTable<f64>,
        stats: &PlayerStats,
        penalized: bool,
    ) -> Result<ChannelResult, LookupError> {
        let mut per_stat = StatTable::<f64>::default();
        for (attribute, entry) in scaling.iter() {
            let Some(entry) = entry else { continue };
            let saturation = self.saturation(entry.curve_id, stats[attribute])?;
            let percent = effective_percent(entry, correct[attribute]);
            per_stat[attribute] = stat_contribution(percent, saturation, base);
        }
        Ok(ChannelResult::from_parts(base, per_stat, penalized))
    }

    /// Resolve a channel scaled by a single stat (status buildup).
    pub fn resolve_single(
        &mut self,
        base: f64,
        attribute: Attribute,
        scaling: &BaseStatScaling,
        correct: f64,
        stats: &PlayerStats,
        penalized: bool,
    ) -> Result<ChannelResult, LookupError> {
        let mut table = StatTable::<Option<BaseStatScaling>>::default();
        table[attribute] = Some(*scaling);
        let mut rates = StatTable::from_fn(|_| 1.0);
        rates[attribute] = correct;
        self.resolve(base, &table, &rates, stats, penalized)
    }
}

/// Whether any stat scaling this channel is below its requirement.
pub fn channel_penalized<'s>(
    scaling_stats: impl IntoIterator<Item = &'s Attribute>,
    stats: &PlayerStats,
    requirements: &StatTable<i32>,
) -> bool {
    scaling_stats
        .into_iter()
        .any(|&attribute| stats[attribute] < requirements[attribute])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaling::{MemoCurveCache, NoCurveCache};

    fn curves() -> BTreeMap<u32, CurveDefinition> {
        let linear = CurveDefinition::new(
            1,
            [0.0, 25.0, 50.0, 75.0, 100.0],
            [0.0, 25.0, 50.0, 75.0, 100.0],
            [1.0; 4],
        );
        [(1, linear)].into_iter().collect()
    }

    #[test]
    fn contributions_sum_into_total() {
        let curves = curves();
        let mut cache = MemoCurveCache::new();
        let mut resolver = ScalingResolver::new(&curves, &mut cache);

        let mut scaling = StatTable::default();
        scaling[Attribute::Str] = Some(BaseStatScaling::new(50.0, 1));
        scaling[Attribute::Dex] = Some(BaseStatScaling::overriding(40.0, 1));
        let correct = StatTable::from_fn(|_| 2.0);
        let stats = PlayerStats::new(50, 25, 10, 10, 10);

        let result = resolver
            .resolve(100.0, &scaling, &correct, &stats, false)
            .unwrap();

        // STR: 50 * 2.0 = 100% at saturation 0.5 → 50
        assert!((result.per_stat[Attribute::Str] - 50.0).abs() < 1e-9);
        // DEX: override 40%, not reinforced, saturation 0.25 → 10
        assert!((result.per_stat[Attribute::Dex] - 10.0).abs() < 1e-9);
        assert!((result.total - 160.0).abs() < 1e-9);
        assert_eq!(result.rounded, 160);
        assert!(!result.penalized);
    }

    #[test]
    fn penalty_drops_scaling() {
        let curves = curves();
        let mut cache = NoCurveCache;
        let mut resolver = ScalingResolver::new(&curves, &mut cache);

        let mut scaling = StatTable::default();
        scaling[Attribute::Arc] = Some(BaseStatScaling::new(100.0, 1));
        let result = resolver
            .resolve(50.0, &scaling, &StatTable::from_fn(|_| 1.0), &PlayerStats::uniform(99), true)
            .unwrap();

        // 50 * 0.6, not floored
        assert!((result.total - 30.0).abs() < 1e-9);
        assert!((result.scaling + 20.0).abs() < 1e-9);
        assert_eq!(result.per_stat, StatTable::default());
    }

    #[test]
    fn dangling_curve_fails() {
        let curves = curves();
        let mut cache = MemoCurveCache::new();
        let mut resolver = ScalingResolver::new(&curves, &mut cache);

        assert_eq!(resolver.saturation(77, 10), Err(LookupError::CurveNotFound(77)));
        assert_eq!(resolver.saturation_or_zero(None, 10), Ok(0.0));
    }

    #[test]
    fn penalty_checks_only_scaling_stats() {
        let reqs = StatTable::from_array([10, 10, 0, 0, 20]);
        let stats = PlayerStats::new(10, 10, 1, 1, 5);
        assert!(!channel_penalized(&[Attribute::Str, Attribute::Dex], &stats, &reqs));
        assert!(channel_penalized(&[Attribute::Arc], &stats, &reqs));
    }
}
