//! Recipe catalog.

use core::cmp::Ordering;

use crate::catalog::{
    CATEGORY_WEIGHT, CatalogEntity, CatalogPipeline, DESCRIPTION_WEIGHT, LIST_WEIGHT, NAME_WEIGHT,
    SearchField, Sorts, TagFilters, compare_names, priority_of,
};

pub const CATEGORIES: &str = "Categories";
pub const INGREDIENTS: &str = "Ingredients";
pub const EFFECTS: &str = "Effects";

pub const SORT_CATEGORY: &str = "category";
pub const SORT_EFFECTS: &str = "effects";

/// Display order of the `category` sort; other categories follow.
pub const CATEGORY_PRIORITY: &[&str] = &["Main", "Side", "Dessert", "Drink"];

/// A cookable recipe.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RecipeRecord", rename_all = "camelCase"))]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub effects: Vec<String>,
    effect_count: usize,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            ingredients: Vec::new(),
            effects: Vec::new(),
            effect_count: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.effects = effects.into_iter().map(Into::into).collect();
        self.effect_count = self.effects.len();
        self
    }

    /// Number of effects, fixed when the recipe is built.
    pub fn effect_count(&self) -> usize {
        self.effect_count
    }
}

/// Wire form of [`Recipe`]; `effect_count` is derived on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    effects: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe::new(record.id, record.name, record.category)
            .with_description(record.description)
            .with_ingredients(record.ingredients)
            .with_effects(record.effects)
    }
}

impl CatalogEntity for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        let mut fields = vec![
            SearchField::new(self.name.as_str(), NAME_WEIGHT),
            SearchField::new(self.description.as_str(), DESCRIPTION_WEIGHT),
            SearchField::new(self.category.as_str(), CATEGORY_WEIGHT),
        ];
        fields.extend(
            self.effects
                .iter()
                .map(|effect| SearchField::new(effect.as_str(), LIST_WEIGHT)),
        );
        fields
    }
}

fn category_values(recipe: &Recipe) -> Vec<&str> {
    vec![recipe.category.as_str()]
}

fn ingredient_values(recipe: &Recipe) -> Vec<&str> {
    recipe.ingredients.iter().map(String::as_str).collect()
}

fn effect_values(recipe: &Recipe) -> Vec<&str> {
    recipe.effects.iter().map(String::as_str).collect()
}

fn by_category(a: &Recipe, b: &Recipe) -> Ordering {
    priority_of(CATEGORY_PRIORITY, &a.category)
        .cmp(&priority_of(CATEGORY_PRIORITY, &b.category))
        .then_with(|| compare_names(&a.category, &b.category))
}

fn by_effect_count(a: &Recipe, b: &Recipe) -> Ordering {
    b.effect_count.cmp(&a.effect_count)
}

pub fn filters() -> TagFilters<Recipe> {
    TagFilters::new()
        .with(
            CATEGORIES,
            |recipe, value| recipe.category.eq_ignore_ascii_case(value),
            category_values,
        )
        .with(
            INGREDIENTS,
            |recipe, value| super::contains(&recipe.ingredients, value),
            ingredient_values,
        )
        .with(
            EFFECTS,
            |recipe, value| super::contains(&recipe.effects, value),
            effect_values,
        )
}

pub fn sorts() -> Sorts<Recipe> {
    Sorts::new()
        .with(SORT_CATEGORY, by_category)
        .with(SORT_EFFECTS, by_effect_count)
}

pub fn pipeline() -> CatalogPipeline<Recipe> {
    CatalogPipeline::new(filters(), sorts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FilterState, SelectedTag, SortOrder};

    fn recipes() -> Vec<Recipe> {
        vec![
            Recipe::new("tea", "Juniper Tea", "Drink").with_effects(["Restore Stamina"]),
            Recipe::new("stew", "Venison Stew", "Main")
                .with_ingredients(["Venison", "Potato", "Salt"])
                .with_effects(["Fortify Health", "Restore Stamina"]),
            Recipe::new("pie", "Apple Pie", "Dessert")
                .with_ingredients(["Apple", "Flour"])
                .with_effects(["Fortify Magicka", "Fortify Health", "Regen"]),
            Recipe::new("roll", "Sweet Roll", "Snack").with_ingredients(["Flour"]),
        ]
    }

    fn sorted_ids(state: &FilterState) -> Vec<String> {
        let recipes = recipes();
        pipeline()
            .run(&recipes, state)
            .sorted
            .into_iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn effect_count_follows_effects() {
        let recipe = Recipe::new("x", "X", "Main").with_effects(["A", "B"]);

        assert_eq!(recipe.effect_count(), 2);
    }

    #[test]
    fn ingredient_tag_is_membership() {
        let state = FilterState::default().with_tag(SelectedTag::new(INGREDIENTS, "flour"));

        assert_eq!(sorted_ids(&state), vec!["pie", "roll"]);
    }

    #[test]
    fn category_sort_uses_priority_then_unknown() {
        let state = FilterState::default().with_sort(SORT_CATEGORY, SortOrder::Ascending);

        assert_eq!(sorted_ids(&state), vec!["stew", "pie", "tea", "roll"]);
    }

    #[test]
    fn effects_sort_is_count_descending() {
        let state = FilterState::default().with_sort(SORT_EFFECTS, SortOrder::Ascending);

        assert_eq!(sorted_ids(&state), vec!["pie", "stew", "tea", "roll"]);
    }

    #[test]
    fn effect_names_are_searchable() {
        let state = FilterState::default().with_search_term("fortify health");

        let mut ids = sorted_ids(&state);
        ids.sort();

        assert_eq!(ids, vec!["pie", "stew"]);
    }
}
