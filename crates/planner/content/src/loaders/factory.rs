//! Content factory for loading every planner dataset from a data directory.

use std::path::{Path, PathBuf};

use planner_core::{Birthsign, Build, PlannerConfig, Race, RaceTable, Recipe, Skill};

use crate::BUNDLED_DATA_DIR;
use crate::loaders::{BuildLoader, ConfigLoader, DatasetLoader, LoadResult};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── planner.toml      (optional)
/// ├── races.json
/// ├── recipes.json
/// ├── birthsigns.json
/// └── skills.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "planner.toml";
    pub const RACES_FILE: &'static str = "races.json";
    pub const RECIPES_FILE: &'static str = "recipes.json";
    pub const BIRTHSIGNS_FILE: &'static str = "birthsigns.json";
    pub const SKILLS_FILE: &'static str = "skills.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the sample dataset shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_DATA_DIR)
    }

    /// Load planner configuration from `planner.toml`, or defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(PlannerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load race starting stats from `races.json`.
    pub fn load_races(&self) -> LoadResult<RaceTable> {
        let races: Vec<Race> = DatasetLoader::load(&self.data_dir.join(Self::RACES_FILE))?;
        Ok(RaceTable::new(races))
    }

    /// Load the recipe catalog from `recipes.json`.
    pub fn load_recipes(&self) -> LoadResult<Vec<Recipe>> {
        DatasetLoader::load(&self.data_dir.join(Self::RECIPES_FILE))
    }

    /// Load the birthsign catalog from `birthsigns.json`.
    pub fn load_birthsigns(&self) -> LoadResult<Vec<Birthsign>> {
        DatasetLoader::load(&self.data_dir.join(Self::BIRTHSIGNS_FILE))
    }

    /// Load the skill catalog from `skills.json`.
    pub fn load_skills(&self) -> LoadResult<Vec<Skill>> {
        DatasetLoader::load(&self.data_dir.join(Self::SKILLS_FILE))
    }

    /// Load a saved build. Relative paths resolve against the data directory.
    pub fn load_build(&self, path: impl AsRef<Path>) -> LoadResult<Build> {
        BuildLoader::load(&self.data_dir.join(path))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for ContentFactory {
    fn default() -> Self {
        Self::bundled()
    }
}
