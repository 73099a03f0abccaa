mod catalog;
mod stats;
mod tags;
mod validate;

pub use catalog::CatalogCmd;
pub use stats::Stats;
pub use tags::Tags;
pub use validate::Validate;

use std::path::PathBuf;

use anyhow::Result;
use planner_content::ContentFactory;
use planner_core::PlannerConfig;

use crate::config::CliConfig;

/// Where commands read their data from, plus the effective configuration.
pub struct DataSource {
    pub factory: ContentFactory,
    pub config: PlannerConfig,
}

impl DataSource {
    /// Opens `data_dir` (or the bundled data) and loads its configuration
    /// with environment overrides applied.
    pub fn open(data_dir: Option<PathBuf>, env: &CliConfig) -> Result<Self> {
        let factory = match data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        let config = env.apply(factory.load_config()?);

        tracing::debug!(
            data_dir = %factory.data_dir().display(),
            page_size = config.page_size,
            min_relevance = config.search.min_relevance,
            "Opened data source"
        );

        Ok(Self { factory, config })
    }
}

/// Catalogs that can be listed.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CatalogKind {
    Recipes,
    Birthsigns,
    Skills,
}
