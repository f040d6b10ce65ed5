//! Calculator configuration loader.

use std::path::Path;

use anyhow::Context;
use calc_core::CalcConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults:
    ///
    /// ```toml
    /// [optimizer]
    /// epsilon = 0.01
    /// lookahead_points = 2
    /// soft_cap_seeds = [18, 30, 60, 80, 99]
    /// ```
    pub fn load(path: &Path) -> LoadResult<CalcConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CalcConfig> {
        toml::from_str(content).context("Failed to parse config TOML")
    }
}
