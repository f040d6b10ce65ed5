//! Exact solve for up to two free stats.

use tracing::trace;

use crate::stats::PlayerStats;

use super::search::Search;

/// Walk the budget line and keep the best split.
///
/// `budget` must not exceed the free stats' capacity. Zero or one free stat
/// has a single allocation; two free stats take `O(budget)` evaluations.
pub fn solve_exact<F: Fn(&PlayerStats) -> f64>(
    search: &mut Search<'_, F>,
    start: &PlayerStats,
    budget: i32,
) -> (PlayerStats, f64) {
    let free: Vec<_> = search.free().to_vec();
    match free.as_slice() {
        [] => {
            let value = search.evaluate(start);
            (*start, value)
        }
        [only] => {
            let mut stats = *start;
            stats[*only] += budget;
            let value = search.evaluate(&stats);
            (stats, value)
        }
        [first, second, ..] => {
            let (first, second) = (*first, *second);
            let low = (budget - search.room(start, second)).max(0);
            let high = budget.min(search.room(start, first));

            let mut best: Option<(PlayerStats, f64)> = None;
            for points in low..=high {
                let mut stats = *start;
                stats[first] += points;
                stats[second] += budget - points;
                let value = search.evaluate(&stats);
                if best.as_ref().is_none_or(|(_, v)| value > *v) {
                    best = Some((stats, value));
                }
            }
            trace!(%first, %second, low, high, "exact 2-D walk");

            best.unwrap_or_else(|| {
                let value = search.evaluate(start);
                (*start, value)
            })
        }
    }
}
