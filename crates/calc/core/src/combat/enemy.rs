//! Enemy-facing damage.

use crate::data::{DamageTable, DamageType};
use crate::round::ceil;
use crate::weapon::ArResult;

// ============================================================================
// Defense Reduction
// ============================================================================

/// Defense multiplier `m(r)` for one damage type, `r = attack / defense`.
///
/// # Formula
///
/// ```text
/// r < 0.125        0.1
/// 0.125 ≤ r < 1    0.1 + (r - 0.125)² / 2.552
/// 1 ≤ r < 2.5      0.7 - (2.5 - r)² / 7.5
/// 2.5 ≤ r < 8      0.9 - (8 - r)² / 151.25
/// r ≥ 8            0.9
/// ```
///
/// Zero attack gives zero; zero (or negative) defense gives the 0.9 ceiling.
pub fn calculate_defense_reduction(attack: f64, defense: f64) -> f64 {
    if attack <= 0.0 {
        return 0.0;
    }
    if defense <= 0.0 {
        return 0.9;
    }
    defense_multiplier(attack / defense)
}

/// `m(r)` itself, without the zero guards.
pub fn defense_multiplier(ratio: f64) -> f64 {
    if ratio < 0.125 {
        0.1
    } else if ratio < 1.0 {
        0.1 + (ratio - 0.125).powi(2) / 2.552
    } else if ratio < 2.5 {
        0.7 - (2.5 - ratio).powi(2) / 7.5
    } else if ratio < 8.0 {
        0.9 - (8.0 - ratio).powi(2) / 151.25
    } else {
        0.9
    }
}

/// `damage × (1 - negation / 100)`; negative negation increases damage.
pub fn apply_negation(damage: f64, negation_percent: f64) -> f64 {
    damage * (1.0 - negation_percent / 100.0)
}

/// Damage of one type: `attack = ar × mv / 100`, then defense, then negation.
pub fn calculate_single_type_damage(
    ar: f64,
    motion_value: f64,
    defense: f64,
    negation_percent: f64,
) -> f64 {
    let attack = ar * motion_value / 100.0;
    let reduced = attack * calculate_defense_reduction(attack, defense);
    apply_negation(reduced, negation_percent)
}

// ============================================================================
// Full Hit
// ============================================================================

/// Attacker AR and target defenses, per damage type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDamageInput {
    pub attack: DamageTable<f64>,
    /// Motion value in percent (100 = plain AR).
    pub motion_value: f64,
    pub defense: DamageTable<f64>,
    pub negation: DamageTable<f64>,
}

impl EnemyDamageInput {
    /// Single-type shorthand: physical only.
    pub fn physical(ar: f64, motion_value: f64, defense: f64, negation: f64) -> Self {
        let mut input = Self {
            attack: DamageTable::default(),
            motion_value,
            defense: DamageTable::default(),
            negation: DamageTable::default(),
        };
        input.attack[DamageType::Physical] = ar;
        input.defense[DamageType::Physical] = defense;
        input.negation[DamageType::Physical] = negation;
        input
    }

    /// Attack taken from the displayed (rounded) AR of every damage type.
    pub fn from_ar(
        ar: &ArResult,
        motion_value: f64,
        defense: DamageTable<f64>,
        negation: DamageTable<f64>,
    ) -> Self {
        Self {
            attack: ar
                .damage
                .map(|_, channel| channel.as_ref().map_or(0.0, |c| c.rounded as f64)),
            motion_value,
            defense,
            negation,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDamageResult {
    pub total: f64,
    /// Ceiling of `total`, as displayed.
    pub rounded: i64,
    pub by_type: DamageTable<f64>,
}

/// Damage dealt to a target; every type is reduced independently.
pub fn calculate_enemy_damage(input: &EnemyDamageInput) -> EnemyDamageResult {
    let by_type = DamageTable::from_fn(|t| {
        calculate_single_type_damage(
            input.attack[t],
            input.motion_value,
            input.defense[t],
            input.negation[t],
        )
    });
    let total = by_type.sum();
    EnemyDamageResult {
        total,
        rounded: ceil(total),
        by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_not_floor() {
        let result = calculate_enemy_damage(&EnemyDamageInput::physical(294.0, 100.0, 117.0, 0.0));
        assert!((result.total - 206.074).abs() < 1e-3);
        assert_eq!(result.rounded, 207);
    }

    #[test]
    fn two_handed_lordsworn_against_117() {
        let result = calculate_enemy_damage(&EnemyDamageInput::physical(327.0, 100.0, 117.0, 0.0));
        // r = 2.7949, m = 0.9 - (8 - r)² / 151.25
        let r: f64 = 327.0 / 117.0;
        let expected = 327.0 * (0.9 - (8.0 - r).powi(2) / 151.25);
        assert!((result.total - expected).abs() < 1e-9);
        assert!((result.total - 235.7246).abs() < 1e-4);
        assert_eq!(result.rounded, 236);
    }

    #[test]
    fn two_handed_lordsworn_end_to_end() {
        use crate::data::Affinity;
        use crate::fixtures;
        use crate::stats::PlayerStats;
        use crate::weapon::{ArOptions, calculate_ar};

        let data = fixtures::weapon_data();
        // 18 Strength two-handed is 27 effective
        let stats = PlayerStats::new(18, 56, 10, 10, 10);
        let ar = calculate_ar(&data, fixtures::LORDSWORN, Affinity::Standard, 19, &stats, ArOptions::two_handed())
            .unwrap();
        assert_eq!(ar.effective_stats.str, 27);
        assert_eq!(ar.rounded, 327);

        let mut defense = DamageTable::default();
        defense[DamageType::Physical] = 117.0;
        let result = calculate_enemy_damage(&EnemyDamageInput::from_ar(
            &ar,
            100.0,
            defense,
            DamageTable::default(),
        ));
        let r: f64 = 327.0 / 117.0;
        let expected = 327.0 * (0.9 - (8.0 - r).powi(2) / 151.25);
        assert!((result.total - expected).abs() < 1e-9);
        assert!((result.total - 235.7246).abs() < 1e-4);
        assert_eq!(result.rounded, 236);

        // Unrounded AR lands on the same display value
        let raw = calculate_enemy_damage(&EnemyDamageInput {
            attack: ar.totals(),
            ..EnemyDamageInput::from_ar(&ar, 100.0, defense, DamageTable::default())
        });
        assert!((raw.total - result.total).abs() < 1e-2);
        assert_eq!(raw.rounded, 236);
    }

    #[test]
    fn zero_guards() {
        assert_eq!(calculate_defense_reduction(0.0, 100.0), 0.0);
        assert_eq!(calculate_defense_reduction(-5.0, 0.0), 0.0);
        assert_eq!(calculate_defense_reduction(100.0, 0.0), 0.9);
        assert_eq!(calculate_single_type_damage(0.0, 100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn tiers() {
        assert_eq!(defense_multiplier(0.05), 0.1);
        assert_eq!(defense_multiplier(20.0), 0.9);
        // r = 1 is the start of tier 3: 0.7 - 1.5² / 7.5 = 0.4
        assert!((defense_multiplier(1.0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn negation_and_vulnerability() {
        assert!((apply_negation(200.0, 20.0) - 160.0).abs() < 1e-9);
        assert!((apply_negation(200.0, -10.0) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn types_are_reduced_independently() {
        let mut input = EnemyDamageInput::physical(200.0, 100.0, 100.0, 0.0);
        input.attack[DamageType::Fire] = 100.0;
        input.defense[DamageType::Fire] = 150.0;
        let result = calculate_enemy_damage(&input);

        let physical = calculate_single_type_damage(200.0, 100.0, 100.0, 0.0);
        let fire = calculate_single_type_damage(100.0, 100.0, 150.0, 0.0);
        assert_eq!(result.by_type[DamageType::Physical], physical);
        assert_eq!(result.by_type[DamageType::Fire], fire);
        assert!((result.total - (physical + fire)).abs() < 1e-12);
        // Aggregate ratio would give a different answer
        let aggregate = 300.0 * calculate_defense_reduction(300.0, 250.0);
        assert!((result.total - aggregate).abs() > 1e-6);
    }
}
