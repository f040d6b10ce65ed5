//! Loaders for calculator data and configuration.
//!
//! The engines in `calc-core` take their data bundles by reference and never
//! touch the filesystem. This crate reads those bundles from disk:
//! - Weapon bundle (`PrecomputedData`) from JSON or RON
//! - Skill bundle (`PrecomputedAowData`) from JSON or RON
//! - Engine configuration (`CalcConfig`) from TOML
//!
//! Every bundle is validated on load; dangling references are logged, not
//! fatal, because the engines already fail closed on them.

pub mod loaders;

pub use loaders::{
    AowDataLoader, BundleFormat, ConfigLoader, ContentFactory, LoadResult, WeaponDataLoader,
    write_bundle,
};
