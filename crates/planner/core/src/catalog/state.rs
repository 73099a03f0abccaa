//! Filter, search and sort selections for a catalog.

use crate::catalog::sort::{ALPHABETICAL, SortOrder};
use crate::catalog::tag::SelectedTag;

/// User-controlled catalog state.
///
/// Every action returns a new state; the previous value is never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FilterState {
    pub selected_tags: Vec<SelectedTag>,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            selected_tags: Vec::new(),
            sort_by: ALPHABETICAL.to_owned(),
            sort_order: SortOrder::Ascending,
            search_term: String::new(),
        }
    }

    pub fn has_tag(&self, tag: &SelectedTag) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Adds `tag` unless it is already selected.
    #[must_use]
    pub fn with_tag(&self, tag: SelectedTag) -> Self {
        let mut next = self.clone();
        if !next.has_tag(&tag) {
            next.selected_tags.push(tag);
        }
        next
    }

    #[must_use]
    pub fn without_tag(&self, tag: &SelectedTag) -> Self {
        let mut next = self.clone();
        next.selected_tags.retain(|selected| selected != tag);
        next
    }

    #[must_use]
    pub fn toggle_tag(&self, tag: SelectedTag) -> Self {
        if self.has_tag(&tag) {
            self.without_tag(&tag)
        } else {
            self.with_tag(tag)
        }
    }

    #[must_use]
    pub fn clear_tags(&self) -> Self {
        Self {
            selected_tags: Vec::new(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sort(&self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            sort_by: sort_by.into(),
            sort_order,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_search_term(&self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self.clone()
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_leave_previous_state_untouched() {
        let initial = FilterState::default();
        let tag = SelectedTag::new("Groups", "Mage");

        let next = initial.with_tag(tag.clone());

        assert!(initial.selected_tags.is_empty());
        assert_eq!(next.selected_tags, vec![tag]);
    }

    #[test]
    fn with_tag_ignores_duplicates() {
        let tag = SelectedTag::new("Groups", "Mage");
        let state = FilterState::default().with_tag(tag.clone()).with_tag(tag);

        assert_eq!(state.selected_tags.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let tag = SelectedTag::new("Effects", "Fortify Health");
        let on = FilterState::default().toggle_tag(tag.clone());
        let off = on.toggle_tag(tag);

        assert_eq!(on.selected_tags.len(), 1);
        assert_eq!(off, FilterState::default());
    }

    #[test]
    fn sort_and_search_replace_only_their_fields() {
        let state = FilterState::default()
            .with_tag(SelectedTag::fuzzy("pie"))
            .with_sort("effects", SortOrder::Descending)
            .with_search_term("apple");

        assert_eq!(state.sort_by, "effects");
        assert_eq!(state.sort_order, SortOrder::Descending);
        assert_eq!(state.search_term, "apple");
        assert_eq!(state.selected_tags.len(), 1);
        assert!(state.clear_tags().selected_tags.is_empty());
    }
}
