//! Guard (block) stats.

use tracing::debug;

use crate::data::{Affinity, DamageTable, LookupError, PrecomputedData};

/// Block absorption and guard boost at one upgrade level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardResult {
    /// Percent of each damage type absorbed while blocking.
    pub absorption: DamageTable<f64>,
    pub guard_boost: f64,
    pub status_resist: f64,
}

/// Guard stats; no attribute scaling is involved.
///
/// Weapons without a guard record block nothing.
pub fn try_calculate_guard_stats(
    data: &PrecomputedData,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
) -> Result<GuardResult, LookupError> {
    let (weapon, affinity_data) = data.weapon_affinity(weapon_name, affinity)?;
    if upgrade_level > weapon.max_upgrade_level {
        return Err(LookupError::UpgradeLevelOutOfRange {
            level: upgrade_level,
            max: weapon.max_upgrade_level,
        });
    }
    let reinforce = data.reinforce(affinity_data.reinforce_type_id, upgrade_level)?;

    let guard = affinity_data.guard.as_ref();
    Ok(GuardResult {
        absorption: DamageTable::from_fn(|t| {
            guard.map_or(0.0, |g| g.cut_rate[t]) * reinforce.guard_cut[t]
        }),
        guard_boost: guard.map_or(0.0, |g| g.guard_boost) * reinforce.guard_boost,
        status_resist: guard.map_or(0.0, |g| g.status_resist),
    })
}

/// [`try_calculate_guard_stats`], failing closed.
pub fn calculate_guard_stats(
    data: &PrecomputedData,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
) -> Option<GuardResult> {
    try_calculate_guard_stats(data, weapon_name, affinity, upgrade_level)
        .inspect_err(|err| debug!(weapon = weapon_name, error = %err, "guard stats unavailable"))
        .ok()
}
