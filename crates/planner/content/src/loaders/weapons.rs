//! Weapon catalog loader.

use std::collections::HashSet;
use std::path::Path;

use planner_core::Weapon;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<Weapon>,
}

/// Loader for weapon catalogs from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load a weapon catalog from a RON file.
    ///
    /// Weapon names are the lookup key for optimization requests, so a
    /// catalog listing the same name twice is rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<Weapon>> {
        let content = read_file(path)?;
        let weapons = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = weapons.len(), "loaded weapon catalog");
        Ok(weapons)
    }

    /// Parse RON text into a checked weapon list.
    pub fn parse(content: &str) -> LoadResult<Vec<Weapon>> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for weapon in &catalog.weapons {
            if !seen.insert(weapon.name.as_str()) {
                anyhow::bail!("Duplicate weapon name in catalog: {}", weapon.name);
            }
        }

        Ok(catalog.weapons)
    }
}
