//! Bullet (flat damage) helpers.

/// Fraction of the way to max upgrade, clamped to `0..=1`.
pub fn power_per_upgrade(upgrade_level: u32, max_upgrade_level: u32) -> f64 {
    if max_upgrade_level == 0 {
        return 0.0;
    }
    (f64::from(upgrade_level) / f64::from(max_upgrade_level)).clamp(0.0, 1.0)
}

/// `1 + 3 × pwu`: 1.0 at +0, 4.0 at max upgrade.
pub fn pwu_multiplier(upgrade_level: u32, max_upgrade_level: u32) -> f64 {
    1.0 + 3.0 * power_per_upgrade(upgrade_level, max_upgrade_level)
}

/// `flat × pwu_multiplier × (1 + scaling_contribution)`.
pub fn compute_bullet_damage(flat: f64, pwu_multiplier: f64, scaling_contribution: f64) -> f64 {
    flat * pwu_multiplier * (1.0 + scaling_contribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_damage_worked_example() {
        // 80 × 4.0 × 1.28125
        assert_eq!(compute_bullet_damage(80.0, 4.0, 0.28125), 410.0);
    }

    #[test]
    fn pwu_range() {
        assert_eq!(pwu_multiplier(0, 25), 1.0);
        assert_eq!(pwu_multiplier(25, 25), 4.0);
        assert_eq!(pwu_multiplier(5, 10), 2.5);
        assert_eq!(pwu_multiplier(30, 25), 4.0);
        assert_eq!(pwu_multiplier(0, 0), 1.0);
    }
}
