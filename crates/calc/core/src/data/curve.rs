/// Piecewise growth curve (`CalcCorrectGraph`).
///
/// Five breakpoints of `(stat_level, growth)` and one shaping exponent per
/// segment. Growth values are percentages (`0..=100`, sometimes above).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveDefinition {
    pub id: u32,
    pub stat_levels: [f64; 5],
    pub growth: [f64; 5],
    pub exponents: [f64; 4],
}

impl CurveDefinition {
    pub const fn new(id: u32, stat_levels: [f64; 5], growth: [f64; 5], exponents: [f64; 4]) -> Self {
        Self {
            id,
            stat_levels,
            growth,
            exponents,
        }
    }
}
