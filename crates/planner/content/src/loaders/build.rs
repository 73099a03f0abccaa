//! Saved build loader.

use std::path::Path;

use planner_core::Build;

use crate::loaders::{LoadResult, read_file};

/// Loader for a single build snapshot from a JSON file.
pub struct BuildLoader;

impl BuildLoader {
    pub fn load(path: &Path) -> LoadResult<Build> {
        let content = read_file(path)?;
        let build: Build = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build JSON {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), race = ?build.race, "Loaded build");
        Ok(build)
    }
}
