//! Greedy restarted from several seeded allocations.

use tracing::trace;

use crate::stats::PlayerStats;

use super::greedy::{GreedyParams, run_greedy};
use super::search::Search;

/// Run greedy from many starts and keep the best.
///
/// Starts: plain greedy, an even split over the free stats, and one seed per
/// free stat raised to each soft cap the budget reaches. Seeds escape local
/// optima of S-shaped objectives where the first points into a stat gain
/// almost nothing.
pub fn run_multi_start<F: Fn(&PlayerStats) -> f64>(
    search: &mut Search<'_, F>,
    start: &PlayerStats,
    budget: i32,
    soft_caps: &[i32],
    params: GreedyParams,
) -> (PlayerStats, f64, i32) {
    let mut seeds: Vec<(PlayerStats, i32)> = vec![(*start, budget)];
    seeds.push(even_split(search, start, budget));

    for &attribute in search.free().to_vec().iter() {
        for &cap in soft_caps {
            let room = search.room(start, attribute);
            let want = (cap - start[attribute]).min(room);
            if want <= 0 {
                continue;
            }
            let spend = want.min(budget);
            let mut seed = *start;
            seed[attribute] += spend;
            seeds.push((seed, budget - spend));
        }
    }

    let mut best: Option<(PlayerStats, f64, i32)> = None;
    for (seed, left) in seeds {
        let result = run_greedy(search, &seed, left, params);
        if best.as_ref().is_none_or(|(_, v, _)| result.1 > *v) {
            best = Some(result);
        }
    }
    trace!(evaluations = search.evaluations(), "multi-start finished");

    // The plain start always runs, so `best` is set
    best.unwrap_or((*start, f64::NEG_INFINITY, budget))
}

/// Spread `budget` round-robin over the free stats, respecting caps.
fn even_split<F: Fn(&PlayerStats) -> f64>(
    search: &Search<'_, F>,
    start: &PlayerStats,
    budget: i32,
) -> (PlayerStats, i32) {
    let mut stats = *start;
    let mut remaining = budget;
    let free = search.free();
    while remaining > 0 {
        let mut placed = false;
        for &attribute in free {
            if remaining == 0 {
                break;
            }
            if search.room(&stats, attribute) > 0 {
                stats[attribute] += 1;
                remaining -= 1;
                placed = true;
            }
        }
        if !placed {
            break;
        }
    }
    (stats, remaining)
}
