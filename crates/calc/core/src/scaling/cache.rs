//! Swappable memoisation for curve evaluations.

use std::collections::HashMap;

/// Cache of curve saturations keyed by `(curve_id, level)`.
///
/// Curve evaluation is pure, so any implementation is correct as long as it
/// returns what was stored. Engines own their cache; tests swap in
/// [`NoCurveCache`] to check equivalence with uncached evaluation.
pub trait CurveCache {
    fn get(&self, curve_id: u32, level: i32) -> Option<f64>;
    fn set(&mut self, curve_id: u32, level: i32, saturation: f64);
}

/// Hash-map cache, shared across every call made through one engine.
#[derive(Clone, Debug, Default)]
pub struct MemoCurveCache {
    entries: HashMap<(u32, i32), f64>,
}

impl MemoCurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl CurveCache for MemoCurveCache {
    fn get(&self, curve_id: u32, level: i32) -> Option<f64> {
        self.entries.get(&(curve_id, level)).copied()
    }

    fn set(&mut self, curve_id: u32, level: i32, saturation: f64) {
        self.entries.insert((curve_id, level), saturation);
    }
}

/// Disabled cache: every lookup misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCurveCache;

impl CurveCache for NoCurveCache {
    fn get(&self, _curve_id: u32, _level: i32) -> Option<f64> {
        None
    }

    fn set(&mut self, _curve_id: u32, _level: i32, _saturation: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_returns_stored_value() {
        let mut cache = MemoCurveCache::new();
        assert_eq!(cache.get(4, 40), None);
        cache.set(4, 40, 0.6);
        assert_eq!(cache.get(4, 40), Some(0.6));
        assert_eq!(cache.get(4, 41), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn disabled_cache_never_hits() {
        let mut cache = NoCurveCache;
        cache.set(4, 40, 0.6);
        assert_eq!(cache.get(4, 40), None);
    }
}
