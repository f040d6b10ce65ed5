//! Exhaustive enumeration; the correctness oracle.

use crate::data::Attribute;
use crate::stats::PlayerStats;

use super::search::Search;

/// Try every allocation of exactly `budget` points over the free stats
/// (stars and bars with caps).
///
/// Combinatorial; meant for tests and small budgets.
pub fn solve_brute_force<F: Fn(&PlayerStats) -> f64>(
    search: &mut Search<'_, F>,
    start: &PlayerStats,
    budget: i32,
) -> (PlayerStats, f64) {
    let free: Vec<Attribute> = search.free().to_vec();
    let mut best: Option<(PlayerStats, f64)> = None;
    let mut stats = *start;
    enumerate(search, &free, &mut stats, budget, &mut best);

    best.unwrap_or_else(|| {
        let value = search.evaluate(start);
        (*start, value)
    })
}

fn enumerate<F: Fn(&PlayerStats) -> f64>(
    search: &mut Search<'_, F>,
    free: &[Attribute],
    stats: &mut PlayerStats,
    remaining: i32,
    best: &mut Option<(PlayerStats, f64)>,
) {
    let Some((&attribute, rest)) = free.split_first() else {
        if remaining == 0 {
            let value = search.evaluate(stats);
            if best.as_ref().is_none_or(|(_, v)| value > *v) {
                *best = Some((*stats, value));
            }
        }
        return;
    };

    let room = search.room(stats, attribute);
    // The last stat takes whatever is left, if it fits
    let range = if rest.is_empty() {
        if remaining > room {
            return;
        }
        remaining..=remaining
    } else {
        0..=remaining.min(room)
    };

    for points in range {
        stats[attribute] += points;
        enumerate(search, rest, stats, remaining - points, best);
        stats[attribute] -= points;
    }
}
