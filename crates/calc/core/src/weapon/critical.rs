//! Critical (riposte and backstab) damage.

use crate::data::{ResolvedWeapon, WeaponType};
use crate::round::round_half_up;

use super::attack_rating::ArResult;

/// Critical hit damage derived from an AR result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalResult {
    pub weapon_type: WeaponType,
    /// `100 + throw_atk_rate`, never below 100.
    pub critical_value: i32,
    /// Weapon-class multiplier.
    pub multiplier: f64,
    pub damage: f64,
    pub rounded: i64,
}

/// Critical value of a weapon.
pub fn critical_value(weapon: &ResolvedWeapon) -> i32 {
    (100 + weapon.throw_atk_rate).max(100)
}

/// Critical damage: `AR × class multiplier × critical value / 100`.
///
/// `None` for classes that cannot crit (bows, crossbows, catalysts, whips).
pub fn calculate_critical(ar: &ArResult, weapon: &ResolvedWeapon) -> Option<CriticalResult> {
    let multiplier = weapon.weapon_type.critical_multiplier()?;
    let critical_value = critical_value(weapon);
    let damage = ar.total * multiplier * f64::from(critical_value) / 100.0;
    Some(CriticalResult {
        weapon_type: weapon.weapon_type,
        critical_value,
        multiplier,
        damage,
        rounded: round_half_up(damage),
    })
}
