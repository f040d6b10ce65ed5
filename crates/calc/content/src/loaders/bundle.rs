//! Weapon and skill bundle loaders.

use std::path::Path;

use anyhow::Context;
use calc_core::{CalcError, DataError, PrecomputedAowData, PrecomputedData};
use serde::Serialize;
use tracing::{info, warn};

use crate::loaders::{BundleFormat, LoadResult, read_file};

/// Loader for the weapon bundle (`weapons.json` / `weapons.ron`).
pub struct WeaponDataLoader;

impl WeaponDataLoader {
    /// Load and validate a weapon bundle.
    ///
    /// Validation findings are logged and returned alongside the bundle.
    pub fn load(path: &Path) -> LoadResult<(PrecomputedData, Vec<DataError>)> {
        let format = BundleFormat::from_path(path)?;
        let data: PrecomputedData = format
            .parse(&read_file(path)?)
            .with_context(|| format!("Invalid weapon bundle {}", path.display()))?;

        let findings = data.validate();
        report(path, &findings);
        info!(
            path = %path.display(),
            weapons = data.weapons.len(),
            curves = data.curves.len(),
            reinforce_tables = data.reinforce_rates.len(),
            "weapon bundle loaded"
        );
        Ok((data, findings))
    }
}

/// Loader for the skill bundle (`aow.json` / `aow.ron`).
pub struct AowDataLoader;

impl AowDataLoader {
    pub fn load(path: &Path) -> LoadResult<(PrecomputedAowData, Vec<DataError>)> {
        let format = BundleFormat::from_path(path)?;
        let data: PrecomputedAowData = format
            .parse(&read_file(path)?)
            .with_context(|| format!("Invalid skill bundle {}", path.display()))?;

        let findings = data.validate();
        report(path, &findings);
        info!(
            path = %path.display(),
            sword_arts = data.sword_arts.len(),
            "skill bundle loaded"
        );
        Ok((data, findings))
    }
}

/// Write any bundle in the format named by the path's extension.
pub fn write_bundle<T: Serialize>(path: &Path, bundle: &T) -> LoadResult<()> {
    let rendered = BundleFormat::from_path(path)?.render(bundle)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write bundle {}", path.display()))
}

fn report(path: &Path, findings: &[DataError]) {
    for finding in findings {
        warn!(
            path = %path.display(),
            code = finding.error_code(),
            "{finding}"
        );
    }
}
