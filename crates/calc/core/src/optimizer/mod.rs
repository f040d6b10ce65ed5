//! Stat allocation optimizer.
//!
//! Spends a point budget across the stats a build scales with so that a
//! caller-supplied objective (usually one AR or skill total) is maximised.
//!
//! ```text
//! base stats ──► apply minimums ──► free stats ──► strategy ──► Solution
//!                (declaration order)   (below cap)   exact / greedy / multi-start / brute
//! ```
//!
//! The objective is treated as a black box. Exact and brute force are
//! optimal for any objective; greedy and multi-start are heuristics that are
//! exact on concave objectives and usually close on S-shaped ones.

mod brute;
mod exact;
mod greedy;
mod multistart;
mod search;

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::data::{Attribute, StatTable};
use crate::stats::PlayerStats;

use brute::solve_brute_force;
use exact::solve_exact;
use greedy::{GreedyParams, run_greedy};
use multistart::run_multi_start;
use search::{Search, apply_minimums, free_stats};

pub use search::FreeStats;

/// Fraction of the proportional single-point gain a lookahead step must beat.
pub const LOOKAHEAD_MARGIN: f64 = 0.9;

/// Lower and upper bound for one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatConfig {
    /// Met before any free spending.
    pub min: i32,
    /// Never exceeded.
    pub max: i32,
}

impl StatConfig {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Pin a stat at one level.
    pub fn locked(level: i32) -> Self {
        Self::new(level, level)
    }

    /// One config per stat with the posted requirement as its minimum.
    pub fn from_requirements(requirements: &StatTable<i32>) -> StatTable<Self> {
        requirements.map(|_, &requirement| Self {
            min: requirement,
            ..Self::default()
        })
    }
}

impl Default for StatConfig {
    fn default() -> Self {
        Self::new(0, crate::config::CalcConfig::MAX_STAT_LEVEL)
    }
}

/// Search strategy.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Strategy {
    /// Exact for up to two free stats, multi-start otherwise.
    #[default]
    Auto,
    /// Budget-line walk over two free stats.
    #[strum(to_string = "exact-2d")]
    #[cfg_attr(feature = "serde", serde(rename = "exact-2d"))]
    Exact2D,
    Greedy,
    MultiStart,
    /// Every allocation. Test oracle; combinatorial cost.
    BruteForce,
}

/// Tuning for one [`solve`] call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveOptions {
    pub strategy: Strategy,
    pub epsilon: f64,
    pub lookahead_points: i32,
    pub soft_cap_seeds: Vec<i32>,
}

impl SolveOptions {
    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self {
            strategy: Strategy::Auto,
            epsilon: config.epsilon,
            lookahead_points: config.lookahead_points,
            soft_cap_seeds: config.soft_cap_seeds.clone(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn greedy_params(&self) -> GreedyParams {
        GreedyParams {
            epsilon: self.epsilon,
            lookahead_points: self.lookahead_points,
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::from_config(&OptimizerConfig::default())
    }
}

/// Best allocation found.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub stats: PlayerStats,
    /// Objective at `stats`.
    pub damage: f64,
    /// Strategy that actually ran (never `Auto`).
    pub strategy: Strategy,
    /// `false` when the budget could not cover every minimum.
    pub minimums_met: bool,
    /// Objective calls made.
    pub evaluations: usize,
    /// Budget left when no point improved the objective or every free stat
    /// reached its cap.
    pub unspent: i32,
}

/// Maximise `objective` over allocations of `budget` points.
///
/// Minimums are met first in declaration order; a budget too small for them
/// is spent as far as it goes and reported through `minimums_met`. The rest
/// goes to `scaling_stats` (the free stats), never past a stat's `max`.
/// Exact and brute force spend every point the caps allow; the greedy
/// strategies may stop early on a flat objective.
pub fn solve(
    base_stats: &PlayerStats,
    scaling_stats: &[Attribute],
    budget: i32,
    stat_configs: &StatTable<StatConfig>,
    objective: impl Fn(&PlayerStats) -> f64,
    options: &SolveOptions,
) -> Solution {
    let (start, remaining, minimums_met) = apply_minimums(base_stats, budget, stat_configs);
    let free = free_stats(scaling_stats, &start, stat_configs);
    let free_count = free.len();
    let mut search = Search::new(stat_configs, free, objective);

    let strategy = match options.strategy {
        Strategy::Auto if free_count <= 2 => Strategy::Exact2D,
        Strategy::Auto => Strategy::MultiStart,
        Strategy::Exact2D if free_count > 2 => Strategy::MultiStart,
        other => other,
    };

    let spendable = remaining.min(search.capacity(&start));
    let params = options.greedy_params();
    let (stats, damage, unspent) = match strategy {
        Strategy::Exact2D => {
            let (stats, damage) = solve_exact(&mut search, &start, spendable);
            (stats, damage, remaining - spendable)
        }
        Strategy::BruteForce => {
            let (stats, damage) = solve_brute_force(&mut search, &start, spendable);
            (stats, damage, remaining - spendable)
        }
        Strategy::Greedy => run_greedy(&mut search, &start, remaining, params),
        Strategy::MultiStart | Strategy::Auto => {
            run_multi_start(&mut search, &start, remaining, &options.soft_cap_seeds, params)
        }
    };

    debug!(
        %strategy,
        free = free_count,
        budget,
        unspent,
        damage,
        evaluations = search.evaluations(),
        "optimizer finished"
    );

    Solution {
        stats,
        damage,
        strategy,
        minimums_met,
        evaluations: search.evaluations(),
        unspent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs() -> StatTable<StatConfig> {
        StatTable::default()
    }

    /// Concave in each stat; optimum balances the weighted square roots.
    fn concave(stats: &PlayerStats) -> f64 {
        3.0 * f64::from(stats.str).sqrt() + 2.0 * f64::from(stats.dex).sqrt()
    }

    /// STR plus a 100 point jump once INT reaches 30.
    fn threshold(stats: &PlayerStats) -> f64 {
        f64::from(stats.str) + if stats.int >= 30 { 100.0 } else { 0.0 }
    }

    /// Only even levels count; one point alone gains nothing.
    fn staircase(stats: &PlayerStats) -> f64 {
        f64::from(stats.str / 2 * 2) * 3.0 + f64::from(stats.dex / 2 * 2)
    }

    #[test]
    fn auto_picks_exact_for_two_stats() {
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Dex],
            40,
            &configs(),
            concave,
            &SolveOptions::default(),
        );
        assert_eq!(solution.strategy, Strategy::Exact2D);
        assert_eq!(solution.stats.total(), 50 + 40);
        assert_eq!(solution.unspent, 0);
        // str + dex = 60; exact walk checks every split
        assert_eq!(solution.evaluations, 41);
    }

    #[test]
    fn exact_matches_brute_force() {
        let exact = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Dex],
            35,
            &configs(),
            concave,
            &SolveOptions::default().with_strategy(Strategy::Exact2D),
        );
        let brute = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Dex],
            35,
            &configs(),
            concave,
            &SolveOptions::default().with_strategy(Strategy::BruteForce),
        );
        assert_eq!(exact.stats, brute.stats);
        assert!((exact.damage - brute.damage).abs() < 1e-12);
    }

    #[test]
    fn auto_uses_multi_start_for_three_stats() {
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Dex, Attribute::Int],
            30,
            &configs(),
            threshold,
            &SolveOptions::default(),
        );
        assert_eq!(solution.strategy, Strategy::MultiStart);
    }

    #[test]
    fn multi_start_escapes_threshold_trap() {
        let free = [Attribute::Str, Attribute::Int];
        let options = SolveOptions::default();
        let base = PlayerStats::uniform(10);

        // Greedy feeds STR forever: 10 + 30 = 40
        let greedy = solve(
            &base,
            &free,
            30,
            &configs(),
            threshold,
            &options.clone().with_strategy(Strategy::Greedy),
        );
        assert_eq!(greedy.stats.str, 40);
        assert!((greedy.damage - 40.0).abs() < 1e-12);

        // The INT 30 seed costs 20 points; the other 10 go to STR: 20 + 100
        let multi = solve(
            &base,
            &free,
            30,
            &configs(),
            threshold,
            &options.clone().with_strategy(Strategy::MultiStart),
        );
        let brute = solve(
            &base,
            &free,
            30,
            &configs(),
            threshold,
            &options.with_strategy(Strategy::BruteForce),
        );
        assert!((multi.damage - 120.0).abs() < 1e-12);
        assert!((brute.damage - 120.0).abs() < 1e-12);
        assert_eq!(multi.stats.int, 30);
    }

    #[test]
    fn lookahead_climbs_staircase() {
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Dex],
            20,
            &configs(),
            staircase,
            &SolveOptions::default().with_strategy(Strategy::Greedy),
        );
        // Every point into STR: 30 × 3 + 10
        assert_eq!(solution.stats.str, 30);
        assert!((solution.damage - 100.0).abs() < 1e-12);
        assert_eq!(solution.unspent, 0);
    }

    #[test]
    fn flat_objective_leaves_points_unspent() {
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str],
            15,
            &configs(),
            |_| 7.0,
            &SolveOptions::default().with_strategy(Strategy::Greedy),
        );
        assert_eq!(solution.unspent, 15);
        assert_eq!(solution.stats, PlayerStats::uniform(10));
    }

    #[test]
    fn caps_limit_spending() {
        let mut configs = configs();
        configs[Attribute::Str] = StatConfig::new(0, 25);
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str],
            40,
            &configs,
            |s| f64::from(s.str),
            &SolveOptions::default(),
        );
        assert_eq!(solution.stats.str, 25);
        assert_eq!(solution.unspent, 25);
    }

    #[test]
    fn unmet_minimums_are_reported() {
        let mut configs = configs();
        configs[Attribute::Str] = StatConfig::new(30, 99);
        configs[Attribute::Arc] = StatConfig::new(25, 99);
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Arc],
            25,
            &configs,
            |s| f64::from(s.str + s.arc),
            &SolveOptions::default(),
        );
        assert!(!solution.minimums_met);
        assert_eq!(solution.stats.str, 30);
        assert_eq!(solution.stats.arc, 15);
        assert_eq!(solution.unspent, 0);
    }

    #[test]
    fn locked_stat_is_not_free() {
        let mut configs = configs();
        configs[Attribute::Dex] = StatConfig::locked(10);
        let solution = solve(
            &PlayerStats::uniform(10),
            &[Attribute::Str, Attribute::Dex],
            10,
            &configs,
            |s| f64::from(s.dex * 10 + s.str),
            &SolveOptions::default(),
        );
        assert_eq!(solution.stats.dex, 10);
        assert_eq!(solution.stats.str, 20);
    }

    #[test]
    fn strategy_parses_kebab_case() {
        assert_eq!("multi-start".parse::<Strategy>(), Ok(Strategy::MultiStart));
        assert_eq!("Exact-2D".parse::<Strategy>(), Ok(Strategy::Exact2D));
        assert_eq!(Strategy::Exact2D.to_string(), "exact-2d");
        assert_eq!(Strategy::BruteForce.to_string(), "brute-force");
    }

    #[test]
    fn requirement_minimums_come_from_weapon() {
        let configs = StatConfig::from_requirements(&StatTable::from_array([12, 18, 0, 0, 20]));
        assert_eq!(configs[Attribute::Dex], StatConfig::new(18, 99));
        assert_eq!(configs[Attribute::Int], StatConfig::default());
    }

    mod attack_rating_objective {
        use super::*;
        use crate::data::Affinity;
        use crate::fixtures;
        use crate::weapon::{ArOptions, calculate_ar};

        fn rivers(budget: i32, strategy: Strategy) -> Solution {
            let data = fixtures::weapon_data();
            let requirements = data
                .weapon(fixtures::RIVERS_OF_BLOOD)
                .unwrap()
                .requirements;
            solve(
                &PlayerStats::uniform(10),
                &[Attribute::Str, Attribute::Dex, Attribute::Arc],
                budget,
                &StatConfig::from_requirements(&requirements),
                |stats| {
                    calculate_ar(
                        &data,
                        fixtures::RIVERS_OF_BLOOD,
                        Affinity::Standard,
                        10,
                        stats,
                        ArOptions::default(),
                    )
                    .map_or(0.0, |ar| ar.total)
                },
                &SolveOptions::default().with_strategy(strategy),
            )
        }

        #[test]
        fn heuristics_track_brute_force_past_the_penalty() {
            for budget in [30, 70] {
                let brute = rivers(budget, Strategy::BruteForce);
                let greedy = rivers(budget, Strategy::Greedy);
                let multi = rivers(budget, Strategy::MultiStart);

                assert!(brute.minimums_met);
                assert_eq!(brute.unspent, 0);
                assert!(brute.stats.str >= 12 && brute.stats.dex >= 18 && brute.stats.arc >= 20);
                assert!(greedy.damage >= brute.damage * 0.98, "budget {budget}");
                assert!(multi.damage >= brute.damage * 0.99, "budget {budget}");
                assert!(multi.damage >= greedy.damage);
            }
        }
    }
}
