//! Greedy allocation with a short lookahead.

use tracing::trace;

use crate::stats::PlayerStats;

use super::LOOKAHEAD_MARGIN;
use super::search::Search;

/// Greedy tuning.
#[derive(Clone, Copy, Debug)]
pub struct GreedyParams {
    pub epsilon: f64,
    pub lookahead_points: i32,
}

/// Spend points one (or `lookahead_points`) at a time on the best gain.
///
/// Each step compares the best single point with the best multi-point step
/// on one stat. The multi-point step wins when its total gain beats
/// `best_single × lookahead × LOOKAHEAD_MARGIN`, which climbs staircase
/// objectives (`floor(x / 2) × 2`) where one point gains nothing. Stops when
/// no step gains more than `epsilon` or the budget runs out.
///
/// Returns the final stats, their value and the points left unspent.
pub fn run_greedy<F: Fn(&PlayerStats) -> f64>(
    search: &mut Search<'_, F>,
    start: &PlayerStats,
    budget: i32,
    params: GreedyParams,
) -> (PlayerStats, f64, i32) {
    let free: Vec<_> = search.free().to_vec();
    let lookahead = params.lookahead_points.max(1);
    let mut stats = *start;
    let mut remaining = budget;
    let mut current = search.evaluate(&stats);

    while remaining > 0 {
        let mut single: Option<(usize, f64, f64)> = None;
        let mut multi: Option<(usize, f64, f64)> = None;

        for (index, &attribute) in free.iter().enumerate() {
            let room = search.room(&stats, attribute);
            if room == 0 {
                continue;
            }

            let mut trial = stats;
            trial[attribute] += 1;
            let value = search.evaluate(&trial);
            let gain = value - current;
            if single.is_none_or(|(_, g, _)| gain > g) {
                single = Some((index, gain, value));
            }

            if lookahead > 1 && room >= lookahead && remaining >= lookahead {
                let mut trial = stats;
                trial[attribute] += lookahead;
                let value = search.evaluate(&trial);
                let gain = value - current;
                if multi.is_none_or(|(_, g, _)| gain > g) {
                    multi = Some((index, gain, value));
                }
            }
        }

        let Some((single_index, single_gain, single_value)) = single else {
            break;
        };

        let threshold = single_gain * f64::from(lookahead) * LOOKAHEAD_MARGIN;
        match multi {
            Some((index, gain, value)) if gain > threshold && gain > params.epsilon => {
                stats[free[index]] += lookahead;
                remaining -= lookahead;
                current = value;
                trace!(attribute = %free[index], points = lookahead, gain, "greedy lookahead step");
            }
            _ if single_gain > params.epsilon => {
                stats[free[single_index]] += 1;
                remaining -= 1;
                current = single_value;
            }
            _ => break,
        }
    }

    (stats, current, remaining)
}
