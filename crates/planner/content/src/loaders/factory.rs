//! Content factory for loading planner data from a directory.

use std::path::{Path, PathBuf};

use planner_core::{OptimizerConfig, Weapon};

use crate::loaders::{ConfigLoader, LoadResult, WeaponLoader, WeightPreset, WeightPresetLoader};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// └── presets.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load optimizer configuration from `config.toml`, falling back to the
    /// defaults when the file does not exist.
    pub fn load_config(&self) -> LoadResult<OptimizerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(OptimizerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the weapon catalog from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<Vec<Weapon>> {
        WeaponLoader::load(&self.data_dir.join("weapons.ron"))
    }

    /// Load objective-weight presets from `presets.ron`.
    pub fn load_presets(&self) -> LoadResult<Vec<WeightPreset>> {
        WeightPresetLoader::load(&self.data_dir.join("presets.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
