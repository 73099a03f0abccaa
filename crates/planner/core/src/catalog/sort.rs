//! Named comparators for catalog ordering.
//!
//! Every ordering breaks ties by name, so sorting is deterministic and
//! sorting an already sorted list leaves it unchanged.

use core::cmp::Ordering;

use crate::catalog::CatalogEntity;

/// Keeps the filter stage's order (search relevance, then input order).
pub const RELEVANCE: &str = "relevance";
pub const ALPHABETICAL: &str = "alphabetical";

/// Primary ordering of a catalog sort; name tie-breaking is added on top.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive name comparison, falling back to exact bytes so that
/// distinct names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn by_name<T: CatalogEntity>(a: &T, b: &T) -> Ordering {
    compare_names(a.name(), b.name())
}

/// Position of `value` in a fixed priority list; unknown values sort last.
pub fn priority_of(priorities: &[&str], value: &str) -> usize {
    priorities
        .iter()
        .position(|p| p.eq_ignore_ascii_case(value))
        .unwrap_or(priorities.len())
}

/// Named comparators offered by one catalog.
///
/// `alphabetical` is always available; [`RELEVANCE`] is handled by the
/// pipeline and never registered here.
pub struct Sorts<T> {
    comparators: Vec<(&'static str, Comparator<T>)>,
}

impl<T: CatalogEntity> Sorts<T> {
    pub fn new() -> Self {
        Self {
            comparators: vec![(ALPHABETICAL, by_name::<T> as Comparator<T>)],
        }
    }

    /// Registers a named comparator (builder pattern), replacing any
    /// comparator of the same name.
    #[must_use]
    pub fn with(mut self, name: &'static str, comparator: Comparator<T>) -> Self {
        self.comparators.retain(|(existing, _)| *existing != name);
        self.comparators.push((name, comparator));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.comparators.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: &str) -> Option<Comparator<T>> {
        self.comparators
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, comparator)| *comparator)
    }

    /// Sorts `items` in place by the comparator named `sort_by`.
    ///
    /// [`RELEVANCE`] leaves the order untouched; an unknown name sorts
    /// alphabetically. `order` flips the primary key only, the name
    /// tie-break is always ascending.
    pub fn sort(&self, items: &mut [&T], sort_by: &str, order: SortOrder) {
        self.sort_by_entity(items, |item| *item, sort_by, order);
    }

    /// Like [`Sorts::sort`], for items that resolve to an entity (indices,
    /// handles).
    pub fn sort_by_entity<'t, U>(
        &self,
        items: &mut [U],
        entity: impl Fn(&U) -> &'t T,
        sort_by: &str,
        order: SortOrder,
    ) where
        T: 't,
    {
        if sort_by.eq_ignore_ascii_case(RELEVANCE) {
            return;
        }

        let primary = self.get(sort_by).unwrap_or_else(|| {
            tracing::debug!(sort_by, "Unknown sort, falling back to alphabetical");
            by_name::<T> as Comparator<T>
        });

        items.sort_by(|a, b| {
            let (a, b) = (entity(a), entity(b));
            order
                .apply(primary(a, b))
                .then_with(|| compare_names(a.name(), b.name()))
        });
    }
}

impl<T: CatalogEntity> Default for Sorts<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Sorts<T> {
    fn clone(&self) -> Self {
        Self {
            comparators: self.comparators.clone(),
        }
    }
}
