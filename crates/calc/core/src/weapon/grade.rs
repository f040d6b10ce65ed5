/// Letter grade shown next to a stat's scaling.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingGrade {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl ScalingGrade {
    /// Grade for a reinforced scaling percent; `None` when the stat does not scale.
    pub fn from_percent(percent: f64) -> Option<Self> {
        let grade = match percent {
            p if p >= 175.0 => Self::S,
            p if p >= 140.0 => Self::A,
            p if p >= 90.0 => Self::B,
            p if p >= 60.0 => Self::C,
            p if p >= 25.0 => Self::D,
            p if p > 0.0 => Self::E,
            _ => return None,
        };
        Some(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(ScalingGrade::from_percent(0.0), None);
        assert_eq!(ScalingGrade::from_percent(10.0), Some(ScalingGrade::E));
        assert_eq!(ScalingGrade::from_percent(25.0), Some(ScalingGrade::D));
        assert_eq!(ScalingGrade::from_percent(59.9), Some(ScalingGrade::D));
        assert_eq!(ScalingGrade::from_percent(60.0), Some(ScalingGrade::C));
        assert_eq!(ScalingGrade::from_percent(139.0), Some(ScalingGrade::B));
        assert_eq!(ScalingGrade::from_percent(140.0), Some(ScalingGrade::A));
        assert_eq!(ScalingGrade::from_percent(200.0), Some(ScalingGrade::S));
        assert!(ScalingGrade::S > ScalingGrade::E);
    }
}
