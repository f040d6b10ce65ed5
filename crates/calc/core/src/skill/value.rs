use core::fmt;

use crate::round::round_half_up;

/// A skill number that may not be computable.
///
/// `Unavailable` means the character cannot use the weapon properly
/// (requirements unmet); it is distinct from a computed zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillValue {
    Unavailable,
    Value(f64),
}

impl SkillValue {
    pub const ZERO: Self = Self::Value(0.0);

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Value(v) => Self::Value(f(v)),
            Self::Unavailable => Self::Unavailable,
        }
    }

    /// Display value, rounded half up.
    pub fn rounded(self) -> Option<i64> {
        self.value().map(round_half_up)
    }
}

impl From<f64> for SkillValue {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for SkillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded() {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("-"),
        }
    }
}
