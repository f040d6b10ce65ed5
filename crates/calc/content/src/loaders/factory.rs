//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use anyhow::bail;
use calc_core::{CalcConfig, DataError, PrecomputedAowData, PrecomputedData};
use tracing::debug;

use crate::loaders::{AowDataLoader, BundleFormat, ConfigLoader, LoadResult, WeaponDataLoader};

/// Content factory that loads calculator content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── weapons.json       (or weapons.ron)
/// └── aow.json           (or aow.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const WEAPONS_STEM: &'static str = "weapons";
    pub const AOW_STEM: &'static str = "aow";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load `config.toml`, or the defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<CalcConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(CalcConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the weapon bundle.
    pub fn load_weapons(&self) -> LoadResult<(PrecomputedData, Vec<DataError>)> {
        WeaponDataLoader::load(&self.bundle_path(Self::WEAPONS_STEM)?)
    }

    /// Load the skill bundle.
    pub fn load_aow(&self) -> LoadResult<(PrecomputedAowData, Vec<DataError>)> {
        AowDataLoader::load(&self.bundle_path(Self::AOW_STEM)?)
    }

    /// First existing `{stem}.json` / `{stem}.ron`, JSON preferred.
    pub fn bundle_path(&self, stem: &str) -> LoadResult<PathBuf> {
        for (extension, _) in BundleFormat::EXTENSIONS {
            let path = self.data_dir.join(format!("{stem}.{extension}"));
            if path.is_file() {
                return Ok(path);
            }
        }
        bail!(
            "No {stem}.json or {stem}.ron in {}",
            self.data_dir.display()
        )
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_bundle_is_an_error() {
        let factory = ContentFactory::new("/nonexistent/calc-data");
        let err = factory.bundle_path("weapons").unwrap_err();
        assert!(err.to_string().contains("weapons.json"));
    }
}
