//! Rules table loader.

use std::path::Path;

use anyhow::Context;
use skirmish_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules tables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a rules table from a TOML file.
    ///
    /// Top-level sections missing from the file keep their default values.
    /// The merged table is validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded rules table");
        Ok(config)
    }

    /// Parse and validate a rules table from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate().context("Invalid rules table")?;
        Ok(config)
    }
}
