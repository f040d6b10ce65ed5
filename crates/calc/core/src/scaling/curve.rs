//! Piecewise growth curve evaluation.

use crate::data::CurveDefinition;

/// Evaluate `curve` at `level`, returning a saturation fraction.
///
/// # Formula
///
/// ```text
/// t      = (level - lo) / (hi - lo)
/// shaped = t^e              (e > 0)
///        = 1 - (1 - t)^-e   (e < 0)
///        = t                (e = 0)
/// growth = grow_lo + shaped * (grow_hi - grow_lo)
/// result = growth / 100
/// ```
///
/// Levels outside the breakpoints clamp to the first/last growth value. A
/// missing curve means no scaling and yields `0.0`.
pub fn evaluate_curve(curve: Option<&CurveDefinition>, level: f64) -> f64 {
    let Some(curve) = curve else {
        return 0.0;
    };

    let levels = &curve.stat_levels;
    let growth = &curve.growth;

    if level <= levels[0] {
        return growth[0] / 100.0;
    }
    if level >= levels[4] {
        return growth[4] / 100.0;
    }

    // First segment whose upper breakpoint is above `level`
    let segment = (0..4).find(|&i| level < levels[i + 1]).unwrap_or(3);
    let (lo, hi) = (levels[segment], levels[segment + 1]);
    let (grow_lo, grow_hi) = (growth[segment], growth[segment + 1]);

    let span = hi - lo;
    if span <= 0.0 {
        return grow_hi / 100.0;
    }

    let t = (level - lo) / span;
    let shaped = shape(t, curve.exponents[segment]);
    (grow_lo + shaped * (grow_hi - grow_lo)) / 100.0
}

fn shape(t: f64, exponent: f64) -> f64 {
    if exponent > 0.0 {
        t.powf(exponent)
    } else if exponent < 0.0 {
        1.0 - (1.0 - t).powf(-exponent)
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical() -> CurveDefinition {
        CurveDefinition::new(
            0,
            [1.0, 18.0, 60.0, 80.0, 150.0],
            [0.0, 25.0, 75.0, 90.0, 110.0],
            [1.2, -1.2, 1.0, 1.0],
        )
    }

    #[test]
    fn missing_curve_is_zero() {
        assert_eq!(evaluate_curve(None, 40.0), 0.0);
    }

    #[test]
    fn clamps_outside_breakpoints() {
        let curve = physical();
        assert_eq!(evaluate_curve(Some(&curve), -5.0), 0.0);
        assert_eq!(evaluate_curve(Some(&curve), 1.0), 0.0);
        assert_eq!(evaluate_curve(Some(&curve), 150.0), 1.1);
        assert_eq!(evaluate_curve(Some(&curve), 400.0), 1.1);
    }

    #[test]
    fn breakpoints_hit_exact_growth() {
        let curve = physical();
        assert!((evaluate_curve(Some(&curve), 18.0) - 0.25).abs() < 1e-12);
        assert!((evaluate_curve(Some(&curve), 60.0) - 0.75).abs() < 1e-12);
        assert!((evaluate_curve(Some(&curve), 80.0) - 0.90).abs() < 1e-12);
    }

    #[test]
    fn linear_segment() {
        let curve = physical();
        // 70 is halfway between 60 and 80 → 75 + 0.5 * 15
        assert!((evaluate_curve(Some(&curve), 70.0) - 0.825).abs() < 1e-12);
    }

    #[test]
    fn negative_exponent_is_concave() {
        let curve = physical();
        // t = 0.5 between 18 and 60, shaped = 1 - 0.5^1.2
        let expected = (25.0 + (1.0 - 0.5f64.powf(1.2)) * 50.0) / 100.0;
        assert!((evaluate_curve(Some(&curve), 39.0) - expected).abs() < 1e-12);
        // Concave: above the straight line
        assert!(expected > 0.5);
    }

    #[test]
    fn zero_exponent_is_linear() {
        let curve = CurveDefinition::new(
            9,
            [0.0, 10.0, 20.0, 30.0, 40.0],
            [0.0, 10.0, 20.0, 30.0, 40.0],
            [0.0, 0.0, 0.0, 0.0],
        );
        assert!((evaluate_curve(Some(&curve), 15.0) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn flat_segment_does_not_divide_by_zero() {
        let curve = CurveDefinition::new(
            3,
            [1.0, 20.0, 20.0, 80.0, 99.0],
            [0.0, 30.0, 50.0, 90.0, 100.0],
            [1.0, 1.0, 1.0, 1.0],
        );
        let value = evaluate_curve(Some(&curve), 20.0);
        assert!(value.is_finite());
    }
}
