//! Content loaders for reading calculator data from files.

pub mod bundle;
pub mod config;
pub mod factory;

pub use bundle::{AowDataLoader, WeaponDataLoader, write_bundle};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

use anyhow::{Context, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// On-disk encoding of a data bundle, picked by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BundleFormat {
    Json,
    Ron,
}

impl BundleFormat {
    pub const EXTENSIONS: [(&'static str, Self); 2] = [("json", Self::Json), ("ron", Self::Ron)];

    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match Self::EXTENSIONS
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        {
            Some((_, format)) => Ok(*format),
            None => bail!(
                "Unsupported bundle format for {} (expected .json or .ron)",
                path.display()
            ),
        }
    }

    pub(crate) fn parse<T: DeserializeOwned>(self, content: &str) -> LoadResult<T> {
        match self {
            Self::Json => serde_json::from_str(content).context("Failed to parse JSON bundle"),
            Self::Ron => ron::from_str(content).context("Failed to parse RON bundle"),
        }
    }

    pub(crate) fn render<T: Serialize>(self, value: &T) -> LoadResult<String> {
        match self {
            Self::Json => {
                serde_json::to_string_pretty(value).context("Failed to serialize JSON bundle")
            }
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .context("Failed to serialize RON bundle"),
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
