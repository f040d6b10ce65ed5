//! Rounding helpers matching the game's display precision.
//!
//! Skill outputs are kept at 3 decimals internally and shown as integers;
//! percentages use 2 decimals, raw multipliers 4. Callers must pick the
//! variant matching the field they fill or results drift from the game.

/// Round half up (toward positive infinity) to `decimals` places.
///
/// `-2.5` rounds to `-2`, `2.5` to `3`. A tiny relative upward nudge absorbs
/// binary representation error so that values such as `1.0005` round the way
/// they read in decimal.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let nudged = scaled + scaled.abs() * f64::EPSILON * 4.0;
    (nudged + 0.5).floor() / factor
}

/// Two decimals, for percentages.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Three decimals, the internal precision of skill results.
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Four decimals, for raw multipliers.
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Round half up to the nearest integer (display fields).
pub fn round_half_up(value: f64) -> i64 {
    round_to(value, 0) as i64
}

/// Ceiling to an integer (enemy-facing damage display).
pub fn ceil(value: f64) -> i64 {
    value.ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_rounds_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(326.5), 327);
    }

    #[test]
    fn negative_halves_round_toward_positive() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.5001), -3);
        assert_eq!(round_half_up(-0.4), 0);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(-0.2), -0.2);
    }

    #[test]
    fn decimal_variants() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round3(1.0005), 1.001);
        assert_eq!(round4(0.123449), 0.1234);
    }

    #[test]
    fn ceil_is_not_floor() {
        assert_eq!(ceil(206.074), 207);
        assert_eq!(ceil(206.0), 206);
    }
}
