//! Shared search state: the free stats, their caps and a counting objective.

use arrayvec::ArrayVec;

use crate::data::{Attribute, StatTable, TableKey};
use crate::stats::PlayerStats;

use super::StatConfig;

/// Stats the search may raise, in declaration order.
pub type FreeStats = ArrayVec<Attribute, 5>;

/// One optimizer run over a fixed set of free stats.
pub struct Search<'o, F> {
    configs: &'o StatTable<StatConfig>,
    free: FreeStats,
    objective: F,
    evaluations: usize,
}

impl<'o, F: Fn(&PlayerStats) -> f64> Search<'o, F> {
    pub fn new(configs: &'o StatTable<StatConfig>, free: FreeStats, objective: F) -> Self {
        Self {
            configs,
            free,
            objective,
            evaluations: 0,
        }
    }

    pub fn free(&self) -> &[Attribute] {
        &self.free
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn evaluate(&mut self, stats: &PlayerStats) -> f64 {
        self.evaluations += 1;
        (self.objective)(stats)
    }

    /// Points `attribute` can still take before its cap.
    pub fn room(&self, stats: &PlayerStats, attribute: Attribute) -> i32 {
        (self.configs[attribute].max - stats[attribute]).max(0)
    }

    /// Points all free stats can still take.
    pub fn capacity(&self, stats: &PlayerStats) -> i32 {
        self.free.iter().map(|&a| self.room(stats, a)).sum()
    }
}

/// Spend budget on unmet minimums, in declaration order.
///
/// Returns the raised stats, the budget left and whether every minimum is met.
pub fn apply_minimums(
    base: &PlayerStats,
    budget: i32,
    configs: &StatTable<StatConfig>,
) -> (PlayerStats, i32, bool) {
    let mut stats = *base;
    let mut remaining = budget.max(0);
    for &attribute in Attribute::ALL {
        let need = (configs[attribute].min - stats[attribute]).max(0);
        let spend = need.min(remaining);
        stats[attribute] += spend;
        remaining -= spend;
    }
    let met = Attribute::ALL
        .iter()
        .all(|&a| stats[a] >= configs[a].min);
    (stats, remaining, met)
}

/// Free stats: requested scaling stats below their cap, deduplicated, in
/// declaration order.
pub fn free_stats(
    scaling_stats: &[Attribute],
    stats: &PlayerStats,
    configs: &StatTable<StatConfig>,
) -> FreeStats {
    Attribute::ALL
        .iter()
        .copied()
        .filter(|a| scaling_stats.contains(a))
        .filter(|&a| stats[a] < configs[a].max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimums_in_declaration_order() {
        let mut configs = StatTable::<StatConfig>::default();
        configs[Attribute::Str].min = 20;
        configs[Attribute::Dex].min = 15;

        let (stats, left, met) = apply_minimums(&PlayerStats::uniform(10), 12, &configs);
        assert_eq!(stats.str, 20);
        assert_eq!(stats.dex, 12);
        assert_eq!(left, 0);
        assert!(!met);

        let (stats, left, met) = apply_minimums(&PlayerStats::uniform(10), 30, &configs);
        assert_eq!((stats.str, stats.dex), (20, 15));
        assert_eq!(left, 15);
        assert!(met);
    }

    #[test]
    fn free_stats_skip_capped_and_duplicates() {
        let mut configs = StatTable::<StatConfig>::default();
        configs[Attribute::Int].max = 10;
        let free = free_stats(
            &[Attribute::Int, Attribute::Dex, Attribute::Dex, Attribute::Str],
            &PlayerStats::uniform(10),
            &configs,
        );
        assert_eq!(free.as_slice(), &[Attribute::Str, Attribute::Dex]);
    }
}
