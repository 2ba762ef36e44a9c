//! Data-driven planner content and loaders.
//!
//! This crate reads the data a host feeds into `planner-core`:
//! - Optimizer tuning (TOML)
//! - Weapon catalogs (RON)
//! - Named objective-weight presets (RON)
//!
//! All loaders deserialize planner-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, WeaponCatalog, WeaponLoader, WeightPreset,
    WeightPresetCatalog, WeightPresetLoader,
};
