//! Catalog filter/search pipeline.
//!
//! One generic pipeline serves every catalog (recipes, birthsigns, skills).
//! Each catalog contributes only its data: the tag categories it understands
//! ([`TagFilters`]) and the orderings it offers ([`Sorts`]).
//!
//! ```text
//! [ entities ] → tag filter (AND) → fuzzy search (relevance) → [ filtered ]
//!                                                                   ↓
//!                                          named comparator → [ sorted ]
//!                                                                   ↓
//!                                               Paginator → [ display window ]
//! ```

pub mod domain;
mod filter;
mod pagination;
mod pipeline;
mod search;
mod sort;
mod state;
mod tag;

use std::borrow::Cow;

pub use filter::{TagFacet, TagFilters, TagGroup};
pub use pagination::Paginator;
pub use pipeline::{Catalog, CatalogPipeline, PipelineOutput};
pub use search::{
    CATEGORY_WEIGHT, DESCRIPTION_WEIGHT, LIST_WEIGHT, NAME_WEIGHT, search_query,
};
pub use sort::{ALPHABETICAL, Comparator, RELEVANCE, SortOrder, Sorts, compare_names, priority_of};
pub use state::FilterState;
pub use tag::{FUZZY_SEARCH, SelectedTag, TagParseError};

/// An entity that can be listed in a catalog.
pub trait CatalogEntity {
    /// Display name; also the tie-breaker for every ordering.
    fn name(&self) -> &str;

    /// Text fields matched by fuzzy search, each with its weight.
    fn search_fields(&self) -> Vec<SearchField<'_>>;
}

/// One weighted text field of a [`CatalogEntity`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchField<'a> {
    pub text: Cow<'a, str>,
    pub weight: f64,
}

impl<'a> SearchField<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}
