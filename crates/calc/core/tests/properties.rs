//! Property tests for the pure engines.

use calc_core::combat::defense_multiplier;
use calc_core::{
    Attribute, CurveDefinition, EnemyDamageInput, PlayerStats, SolveOptions, StatConfig,
    StatTable, Strategy, calculate_enemy_damage, evaluate_curve, solve,
};
use proptest::prelude::*;

fn physical_curve() -> CurveDefinition {
    CurveDefinition::new(
        0,
        [1.0, 18.0, 60.0, 80.0, 150.0],
        [0.0, 25.0, 75.0, 90.0, 110.0],
        [1.2, -1.2, 1.0, 1.0],
    )
}

fn weighted_sqrt(weights: [f64; 5]) -> impl Fn(&PlayerStats) -> f64 {
    move |stats| {
        stats
            .iter()
            .map(|(attribute, level)| weights[attribute as usize] * f64::from(level).sqrt())
            .sum()
    }
}

/// Deterministic but irregular objective.
fn jagged(stats: &PlayerStats) -> f64 {
    f64::from((stats.str * 7919 + stats.dex * 104_729 + stats.int * 31) % 101)
}

fn run(
    free: &[Attribute],
    budget: i32,
    configs: &StatTable<StatConfig>,
    objective: impl Fn(&PlayerStats) -> f64,
    strategy: Strategy,
) -> calc_core::Solution {
    solve(
        &PlayerStats::uniform(10),
        free,
        budget,
        configs,
        objective,
        &SolveOptions::default().with_strategy(strategy),
    )
}

// ============================================================================
// Curve evaluator
// ============================================================================

proptest! {
    #[test]
    fn curve_is_monotonic_and_bounded(a in 0i32..=160, b in 0i32..=160) {
        let curve = physical_curve();
        let (lo, hi) = (a.min(b), a.max(b));
        let at_lo = evaluate_curve(Some(&curve), f64::from(lo));
        let at_hi = evaluate_curve(Some(&curve), f64::from(hi));
        prop_assert!(at_lo <= at_hi + 1e-12);
        prop_assert!((0.0..=1.1).contains(&at_lo));
        prop_assert!((0.0..=1.1).contains(&at_hi));
    }
}

// ============================================================================
// Defense reduction
// ============================================================================

#[test]
fn defense_tiers_are_continuous() {
    for boundary in [0.125, 1.0, 2.5, 8.0] {
        let below = defense_multiplier(boundary - 1e-9);
        let at = defense_multiplier(boundary);
        assert!((below - at).abs() < 1e-4, "jump at r = {boundary}: {below} vs {at}");
    }
}

proptest! {
    #[test]
    fn defense_multiplier_is_monotonic(a in 0.0f64..20.0, b in 0.0f64..20.0) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(defense_multiplier(lo) <= defense_multiplier(hi) + 1e-4);
        prop_assert!((0.1..=0.9).contains(&defense_multiplier(lo)));
    }

    #[test]
    fn enemy_damage_rounds_up(ar in 1.0f64..2000.0, defense in 1.0f64..300.0, mv in 10.0f64..400.0) {
        let result = calculate_enemy_damage(&EnemyDamageInput::physical(ar, mv, defense, 0.0));
        prop_assert_eq!(result.rounded, result.total.ceil() as i64);
        prop_assert!(result.total <= ar * mv / 100.0 * 0.9 + 1e-9);
    }
}

// ============================================================================
// Optimizer
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exact_equals_brute_force(budget in 0i32..60, cap in 20i32..=99) {
        let mut configs = StatTable::<StatConfig>::default();
        configs[Attribute::Dex] = StatConfig::new(0, cap);
        let free = [Attribute::Str, Attribute::Dex];

        let exact = run(&free, budget, &configs, jagged, Strategy::Exact2D);
        let brute = run(&free, budget, &configs, jagged, Strategy::BruteForce);
        prop_assert_eq!(exact.stats, brute.stats);
        prop_assert_eq!(exact.damage, brute.damage);
        prop_assert_eq!(exact.unspent, brute.unspent);
    }

    #[test]
    fn heuristics_stay_close_to_optimum(
        weights in prop::array::uniform5(1.0f64..5.0),
        budget in 1i32..30,
    ) {
        let configs = StatTable::<StatConfig>::default();
        let free = [Attribute::Str, Attribute::Dex, Attribute::Fai];

        let brute = run(&free, budget, &configs, weighted_sqrt(weights), Strategy::BruteForce);
        let greedy = run(&free, budget, &configs, weighted_sqrt(weights), Strategy::Greedy);
        let multi = run(&free, budget, &configs, weighted_sqrt(weights), Strategy::MultiStart);

        prop_assert!(greedy.damage >= brute.damage * 0.98);
        prop_assert!(multi.damage >= brute.damage * 0.99);
        prop_assert!(brute.damage >= multi.damage - 1e-9);
    }

    #[test]
    fn multi_start_never_loses_to_greedy(budget in 0i32..40) {
        let configs = StatTable::<StatConfig>::default();
        let free = [Attribute::Str, Attribute::Dex, Attribute::Int];
        let greedy = run(&free, budget, &configs, jagged, Strategy::Greedy);
        let multi = run(&free, budget, &configs, jagged, Strategy::MultiStart);
        prop_assert!(multi.damage >= greedy.damage);
    }

    #[test]
    fn budget_and_caps_are_respected(
        budget in 0i32..80,
        caps in prop::array::uniform3(10i32..=40),
        strategy in prop::sample::select(vec![
            Strategy::Auto,
            Strategy::Greedy,
            Strategy::MultiStart,
        ]),
    ) {
        let free = [Attribute::Str, Attribute::Int, Attribute::Arc];
        let mut configs = StatTable::<StatConfig>::default();
        for (attribute, cap) in free.iter().zip(caps) {
            configs[*attribute] = StatConfig::new(0, cap);
        }

        let solution = run(&free, budget, &configs, weighted_sqrt([1.0; 5]), strategy);
        let spent = solution.stats.total() - PlayerStats::uniform(10).total();
        prop_assert_eq!(spent + solution.unspent, budget);
        for attribute in free {
            prop_assert!(solution.stats[attribute] <= configs[attribute].max);
        }
        prop_assert_eq!(solution.stats.dex, 10);
        prop_assert!(solution.minimums_met);
    }
}
