//! List a catalog through the filter/search/sort pipeline.

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_core::catalog::domain::{birthsigns, recipes, skills};
use planner_core::catalog::{ALPHABETICAL, RELEVANCE};
use planner_core::{
    Birthsign, Catalog, CatalogEntity, CatalogPipeline, FilterState, PlannerConfig, Recipe,
    SelectedTag, Skill, SortOrder,
};

use super::{CatalogKind, DataSource};

/// List a catalog through tag filters, search and sort
#[derive(Parser)]
pub struct CatalogCmd {
    /// Catalog to list
    #[arg(value_enum)]
    kind: CatalogKind,

    /// Tag filter as CATEGORY=VALUE; repeat to require several
    #[arg(short, long = "tag", value_name = "CATEGORY=VALUE")]
    tags: Vec<SelectedTag>,

    /// Fuzzy search query
    #[arg(short, long)]
    query: Option<String>,

    /// Sort name (alphabetical, relevance, or a catalog-specific sort)
    #[arg(short, long, default_value = ALPHABETICAL)]
    sort: String,

    /// Reverse the sort's primary key
    #[arg(long)]
    desc: bool,

    /// Number of pages to show
    #[arg(short, long, default_value_t = 1)]
    pages: usize,
}

impl CatalogCmd {
    pub fn execute(self, source: &DataSource) -> Result<()> {
        let config = &source.config;
        match self.kind {
            CatalogKind::Recipes => self.list(
                source.factory.load_recipes()?,
                recipes::pipeline(),
                config,
                describe_recipe,
            ),
            CatalogKind::Birthsigns => self.list(
                source.factory.load_birthsigns()?,
                birthsigns::pipeline(),
                config,
                describe_birthsign,
            ),
            CatalogKind::Skills => self.list(
                source.factory.load_skills()?,
                skills::pipeline(),
                config,
                describe_skill,
            ),
        }
    }

    fn state(&self) -> FilterState {
        let order = if self.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        let state = FilterState::default()
            .with_sort(self.sort.as_str(), order)
            .with_search_term(self.query.clone().unwrap_or_default());

        self.tags
            .iter()
            .cloned()
            .fold(state, |state, tag| state.with_tag(tag))
    }

    fn list<T: CatalogEntity>(
        &self,
        entities: Vec<T>,
        pipeline: CatalogPipeline<T>,
        config: &PlannerConfig,
        describe: fn(&T) -> String,
    ) -> Result<()> {
        let sorts: Vec<&str> = pipeline.sorts().names().collect();
        let known_sort = self.sort.eq_ignore_ascii_case(RELEVANCE)
            || sorts.iter().any(|name| name.eq_ignore_ascii_case(&self.sort));
        if !known_sort {
            eprintln!(
                "{} unknown sort '{}', using {} (available: {}, {})",
                style("warning:").yellow().bold(),
                self.sort,
                ALPHABETICAL,
                sorts.join(", "),
                RELEVANCE
            );
        }

        let state = self.state();
        let unknown = pipeline.filters().unknown_categories(&state.selected_tags);
        if !unknown.is_empty() {
            let categories: Vec<&str> = pipeline.filters().categories().collect();
            eprintln!(
                "{} unknown tag categor{} {}, ignored (available: {})",
                style("warning:").yellow().bold(),
                if unknown.len() == 1 { "y" } else { "ies" },
                unknown.join(", "),
                categories.join(", ")
            );
        }

        let mut catalog = Catalog::with_config(entities, pipeline, config);
        catalog.set_state(state);
        for _ in 1..self.pages {
            if !catalog.load_more() {
                break;
            }
        }

        let items = catalog.display_items();
        println!(
            "{} {} of {} matching ({} total)",
            style("Showing").bold().cyan(),
            items.len(),
            catalog.filtered().len(),
            catalog.entities().len()
        );
        println!();

        for item in &items {
            println!("  {}  {}", style(item.name()).bold(), style(describe(item)).dim());
        }

        if catalog.has_more() {
            println!();
            println!("{}", style("More entries available; raise --pages to see them").dim());
        }

        Ok(())
    }
}

fn describe_recipe(recipe: &Recipe) -> String {
    format!("[{}] {}", recipe.category, recipe.effects.join(", "))
}

fn describe_birthsign(birthsign: &Birthsign) -> String {
    let powers: Vec<&str> = birthsign.powers.iter().map(|p| p.name.as_str()).collect();
    format!("[{}] {}", birthsign.group, powers.join(", "))
}

fn describe_skill(skill: &Skill) -> String {
    let attribute = skill
        .governing_attribute
        .map_or_else(|| "-".to_owned(), |attribute| attribute.to_string());
    format!(
        "[{}] {}, {} abilities",
        skill.category,
        attribute,
        skill.ability_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(args: &[&str]) -> CatalogCmd {
        CatalogCmd::try_parse_from(std::iter::once("catalog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn miscased_category_is_reported_unknown() {
        let state = cmd(&["recipes", "--tag", "categories=Dessert", "--tag", "Ingredients=Flour"]).state();

        let unknown = recipes::filters().unknown_categories(&state.selected_tags);

        assert_eq!(unknown, vec!["categories"]);
    }

    #[test]
    fn state_carries_query_and_sort() {
        let state = cmd(&["skills", "--query", "block", "--sort", "Abilities", "--desc"]).state();

        assert_eq!(state.search_term, "block");
        assert_eq!(state.sort_by, "Abilities");
        assert_eq!(state.sort_order, SortOrder::Descending);
        assert!(state.selected_tags.is_empty());
    }
}
