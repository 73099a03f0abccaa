//! Show the tag values a catalog offers.

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_core::catalog::domain::{birthsigns, recipes, skills};
use planner_core::{Catalog, CatalogEntity, CatalogPipeline, PlannerConfig, TagGroup};

use super::{CatalogKind, DataSource};

/// Show the tag values available in a catalog
#[derive(Parser)]
pub struct Tags {
    /// Catalog to inspect
    #[arg(value_enum)]
    kind: CatalogKind,
}

impl Tags {
    pub fn execute(self, source: &DataSource) -> Result<()> {
        let factory = &source.factory;
        let groups = match self.kind {
            CatalogKind::Recipes => {
                available(factory.load_recipes()?, recipes::pipeline(), &source.config)
            }
            CatalogKind::Birthsigns => {
                available(factory.load_birthsigns()?, birthsigns::pipeline(), &source.config)
            }
            CatalogKind::Skills => available(factory.load_skills()?, skills::pipeline(), &source.config),
        };

        for group in groups {
            println!(
                "{} {}",
                style(format!("{}:", group.category)).bold().yellow(),
                style(format!("({} values)", group.values.len())).dim()
            );
            for value in &group.values {
                println!("  {}={}", group.category, value);
            }
            println!();
        }

        Ok(())
    }
}

fn available<T: CatalogEntity>(
    entities: Vec<T>,
    pipeline: CatalogPipeline<T>,
    config: &PlannerConfig,
) -> Vec<TagGroup> {
    Catalog::with_config(entities, pipeline, config).available_tags()
}
