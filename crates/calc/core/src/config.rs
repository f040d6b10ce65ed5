/// Calculator configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalcConfig {
    /// Defaults used by [`crate::optimizer::solve`] when no explicit options are given.
    pub optimizer: OptimizerConfig,
}

impl CalcConfig {
    // ===== game rules (not tunable) =====
    /// Highest level any attribute can reach.
    pub const MAX_STAT_LEVEL: i32 = 99;
    /// Effective Strength multiplier while two-handing.
    pub const TWO_HAND_STR_MULTIPLIER: f64 = 1.5;
    /// Effective Strength never exceeds this while two-handing.
    pub const TWO_HAND_STR_CAP: f64 = 148.0;
    /// Channel multiplier applied when a scaling stat is below its requirement.
    pub const REQUIREMENT_PENALTY: f64 = 0.6;

    pub fn new() -> Self {
        Self {
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime-tunable defaults for the stat allocation optimizer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Greedy stops once no step gains more than this.
    pub epsilon: f64,
    /// Width of the greedy lookahead step, in points.
    pub lookahead_points: i32,
    /// Stat levels used as multi-start seeds (soft caps).
    pub soft_cap_seeds: Vec<i32>,
}

impl OptimizerConfig {
    pub const DEFAULT_EPSILON: f64 = 0.01;
    pub const DEFAULT_LOOKAHEAD_POINTS: i32 = 2;
    pub const DEFAULT_SOFT_CAP_SEEDS: [i32; 5] = [18, 30, 60, 80, 99];
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            lookahead_points: Self::DEFAULT_LOOKAHEAD_POINTS,
            soft_cap_seeds: Self::DEFAULT_SOFT_CAP_SEEDS.to_vec(),
        }
    }
}
