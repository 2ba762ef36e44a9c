//! Optimizer configuration loader.

use std::path::Path;

use planner_core::OptimizerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for optimizer tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate an [`OptimizerConfig`] from a TOML file.
    ///
    /// Keys missing from the file keep their compiled-in defaults, so an
    /// empty file yields [`OptimizerConfig::default`].
    pub fn load(path: &Path) -> LoadResult<OptimizerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<OptimizerConfig> {
        let config: OptimizerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid optimizer config: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, OptimizerConfig::default());
    }

    #[test]
    fn overrides_selected_keys() {
        let config = ConfigLoader::parse(
            r#"
            max_attribute = 60
            ineffective_multiplier = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(config.max_attribute, 60);
        assert_eq!(config.ineffective_multiplier, 0.25);
        assert_eq!(config.max_regular_upgrade, OptimizerConfig::MAX_REGULAR_UPGRADE);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = ConfigLoader::parse("max_attribute = 120").unwrap_err();
        assert!(err.to_string().contains("Invalid optimizer config"));

        let err = ConfigLoader::parse("max_special_upgrade = 30").unwrap_err();
        assert!(err.to_string().contains("Invalid optimizer config"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "requirement_penalty = 5000.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.requirement_penalty, 5000.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
