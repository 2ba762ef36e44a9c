//! Objective-weight preset loader.
//!
//! Presets give names to common objectives ("pure physical", "bleed",
//! "incantations") so hosts can offer them without hard-coding weights.

use std::collections::HashSet;
use std::path::Path;

use planner_core::ObjectiveWeights;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A named set of objective weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPreset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub weights: ObjectiveWeights,
}

/// Preset catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightPresetCatalog {
    pub presets: Vec<WeightPreset>,
}

impl WeightPresetCatalog {
    /// Looks up a preset by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&WeightPreset> {
        self.presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

/// Loader for objective-weight presets from RON files.
pub struct WeightPresetLoader;

impl WeightPresetLoader {
    /// Load presets from a RON file.
    ///
    /// Fails on duplicate names (compared case-insensitively) and on any
    /// negative or non-finite weight.
    pub fn load(path: &Path) -> LoadResult<Vec<WeightPreset>> {
        let content = read_file(path)?;
        let presets = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = presets.len(), "loaded weight presets");
        Ok(presets)
    }

    /// Parse RON text into a checked preset list.
    pub fn parse(content: &str) -> LoadResult<Vec<WeightPreset>> {
        let catalog: WeightPresetCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weight preset RON: {}", e))?;

        let mut seen = HashSet::new();
        for preset in &catalog.presets {
            if !seen.insert(preset.name.to_ascii_lowercase()) {
                anyhow::bail!("Duplicate weight preset name: {}", preset.name);
            }
            preset
                .weights
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid weight preset {}: {}", preset.name, e))?;
        }

        Ok(catalog.presets)
    }
}
