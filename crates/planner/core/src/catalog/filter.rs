//! Category-to-predicate tag filtering.

use std::collections::BTreeSet;

use crate::catalog::tag::SelectedTag;

/// Tag category understood by one catalog.
///
/// `matches` decides whether an entity passes a tag of this category;
/// `values` lists the entity's values for the category (for tag pickers).
pub struct TagFacet<T> {
    pub category: &'static str,
    pub matches: fn(&T, &str) -> bool,
    pub values: fn(&T) -> Vec<&str>,
}

impl<T> Clone for TagFacet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TagFacet<T> {}

/// Distinct values available for one tag category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagGroup {
    pub category: &'static str,
    pub values: Vec<String>,
}

/// Set of tag categories and their predicates for entity type `T`.
pub struct TagFilters<T> {
    facets: Vec<TagFacet<T>>,
}

impl<T> TagFilters<T> {
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Registers a category (builder pattern). A later registration of the
    /// same category replaces the earlier one.
    #[must_use]
    pub fn with(
        mut self,
        category: &'static str,
        matches: fn(&T, &str) -> bool,
        values: fn(&T) -> Vec<&str>,
    ) -> Self {
        self.facets.retain(|facet| facet.category != category);
        self.facets.push(TagFacet {
            category,
            matches,
            values,
        });
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.facets.iter().map(|facet| facet.category)
    }

    pub fn facet(&self, category: &str) -> Option<&TagFacet<T>> {
        self.facets.iter().find(|facet| facet.category == category)
    }

    /// True when `entity` satisfies every tag.
    ///
    /// Fuzzy-search tags and tags of unregistered categories always pass.
    pub fn matches(&self, entity: &T, tags: &[SelectedTag]) -> bool {
        tags.iter().all(|tag| {
            if tag.is_fuzzy() {
                return true;
            }
            match self.facet(&tag.category) {
                Some(facet) => (facet.matches)(entity, &tag.value),
                None => true,
            }
        })
    }

    /// Categories of `tags` that no facet handles (fuzzy tags excluded).
    pub fn unknown_categories<'t>(&self, tags: &'t [SelectedTag]) -> Vec<&'t str> {
        tags.iter()
            .filter(|tag| !tag.is_fuzzy() && self.facet(&tag.category).is_none())
            .map(|tag| tag.category.as_str())
            .collect()
    }

    /// Sorted distinct values per category across `entities`.
    pub fn available<'e>(&self, entities: impl IntoIterator<Item = &'e T> + Clone) -> Vec<TagGroup>
    where
        T: 'e,
    {
        self.facets
            .iter()
            .map(|facet| {
                let values: BTreeSet<&str> = entities
                    .clone()
                    .into_iter()
                    .flat_map(|entity| (facet.values)(entity))
                    .collect();
                TagGroup {
                    category: facet.category,
                    values: values.into_iter().map(str::to_owned).collect(),
                }
            })
            .collect()
    }
}

impl<T> Default for TagFilters<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TagFilters<T> {
    fn clone(&self) -> Self {
        Self {
            facets: self.facets.clone(),
        }
    }
}
