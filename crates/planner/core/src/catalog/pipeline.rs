//! The shared filter → search → sort pipeline and its stateful holder.

use crate::catalog::CatalogEntity;
use crate::catalog::filter::{TagFilters, TagGroup};
use crate::catalog::pagination::Paginator;
use crate::catalog::search::{FuzzySearch, search_query};
use crate::catalog::sort::{SortOrder, Sorts};
use crate::catalog::state::FilterState;
use crate::catalog::tag::SelectedTag;
use crate::config::{PlannerConfig, SearchConfig};
use crate::memo::Memo;

/// Result of one pipeline run, borrowing from the entity list.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput<'a, T> {
    /// Entities passing the tag filters and the fuzzy search, in relevance
    /// order (input order when there is no query).
    pub filtered: Vec<&'a T>,
    /// `filtered` ordered by the selected sort.
    pub sorted: Vec<&'a T>,
}

/// Stateless pipeline for one catalog: its tag filters, its sorts and the
/// search tuning.
pub struct CatalogPipeline<T> {
    filters: TagFilters<T>,
    sorts: Sorts<T>,
    search: SearchConfig,
}

impl<T: CatalogEntity> CatalogPipeline<T> {
    pub fn new(filters: TagFilters<T>, sorts: Sorts<T>) -> Self {
        Self {
            filters,
            sorts,
            search: SearchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_search_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn filters(&self) -> &TagFilters<T> {
        &self.filters
    }

    pub fn sorts(&self) -> &Sorts<T> {
        &self.sorts
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Indices of the entities selected by `state`'s tags and search query.
    pub fn filter_indices(&self, entities: &[T], state: &FilterState) -> Vec<usize> {
        let tags = &state.selected_tags;
        for category in self.filters.unknown_categories(tags) {
            tracing::debug!(category, "No filter for tag category, tag ignored");
        }

        let candidates: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| self.filters.matches(entity, tags))
            .map(|(index, _)| index)
            .collect();

        match FuzzySearch::new(&search_query(tags, &state.search_term), &self.search) {
            Some(mut search) => search.rank(entities, candidates),
            None => candidates,
        }
    }

    /// `filtered` reordered by `state`'s sort.
    pub fn sort_indices(&self, entities: &[T], filtered: &[usize], state: &FilterState) -> Vec<usize> {
        let mut sorted = filtered.to_vec();
        self.sorts
            .sort_by_entity(&mut sorted, |&index| &entities[index], &state.sort_by, state.sort_order);
        sorted
    }

    pub fn run<'a>(&self, entities: &'a [T], state: &FilterState) -> PipelineOutput<'a, T> {
        let filtered = self.filter_indices(entities, state);
        let sorted = self.sort_indices(entities, &filtered, state);
        PipelineOutput {
            filtered: filtered.into_iter().map(|index| &entities[index]).collect(),
            sorted: sorted.into_iter().map(|index| &entities[index]).collect(),
        }
    }

    /// Distinct values of every tag category across `entities`.
    pub fn available_tags(&self, entities: &[T]) -> Vec<TagGroup> {
        self.filters.available(entities)
    }
}

impl<T> Clone for CatalogPipeline<T> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            sorts: self.sorts.clone(),
            search: self.search,
        }
    }
}

#[derive(Debug, Default)]
struct RunIndices {
    filtered: Vec<usize>,
    sorted: Vec<usize>,
}

/// A catalog view: entities, the current [`FilterState`] and a paginated
/// display window.
///
/// The pipeline runs once per distinct state; re-applying an identical state
/// is served from the last run and keeps the current page.
pub struct Catalog<T> {
    entities: Vec<T>,
    pipeline: CatalogPipeline<T>,
    state: FilterState,
    paginator: Paginator,
    last_run: Memo<FilterState, RunIndices>,
}

impl<T: CatalogEntity> Catalog<T> {
    pub fn new(entities: Vec<T>, pipeline: CatalogPipeline<T>) -> Self {
        Self::with_config(entities, pipeline, &PlannerConfig::default())
    }

    /// Catalog using the page size and search tuning from `config`.
    pub fn with_config(entities: Vec<T>, pipeline: CatalogPipeline<T>, config: &PlannerConfig) -> Self {
        let mut catalog = Self {
            entities,
            pipeline: pipeline.with_search_config(config.search),
            state: FilterState::default(),
            paginator: Paginator::new(config.page_size),
            last_run: Memo::new(),
        };
        catalog.refresh();
        catalog
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.paginator = Paginator::new(page_size);
        self.refresh();
        self
    }

    fn refresh(&mut self) {
        let Self {
            entities,
            pipeline,
            state,
            paginator,
            last_run,
        } = self;
        let entities: &[T] = entities;

        let run = last_run.get_or_compute(state.clone(), |state| {
            let filtered = pipeline.filter_indices(entities, state);
            let sorted = pipeline.sort_indices(entities, &filtered, state);
            RunIndices { filtered, sorted }
        });
        paginator.sync(run.filtered.iter().map(|&index| entities[index].name()));
    }

    fn run(&self) -> (&[usize], &[usize]) {
        match self.last_run.value() {
            Some(run) => (run.filtered.as_slice(), run.sorted.as_slice()),
            None => Default::default(),
        }
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&T> {
        indices.iter().map(|&index| &self.entities[index]).collect()
    }

    // ===== actions =====

    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
        self.refresh();
    }

    pub fn add_tag(&mut self, tag: SelectedTag) {
        self.set_state(self.state.with_tag(tag));
    }

    pub fn remove_tag(&mut self, tag: &SelectedTag) {
        self.set_state(self.state.without_tag(tag));
    }

    pub fn toggle_tag(&mut self, tag: SelectedTag) {
        self.set_state(self.state.toggle_tag(tag));
    }

    pub fn clear_tags(&mut self) {
        self.set_state(self.state.clear_tags());
    }

    pub fn set_sort(&mut self, sort_by: impl Into<String>, sort_order: SortOrder) {
        self.set_state(self.state.with_sort(sort_by, sort_order));
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.set_state(self.state.with_search_term(search_term));
    }

    /// Replaces the entity list (e.g. after a dataset reload). The page is
    /// kept if the filtered content comes out identical.
    pub fn set_entities(&mut self, entities: Vec<T>) {
        self.entities = entities;
        self.last_run.clear();
        self.refresh();
    }

    /// Shows one more page; returns `false` when everything is visible.
    pub fn load_more(&mut self) -> bool {
        self.paginator.load_more()
    }

    // ===== views =====

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn pipeline(&self) -> &CatalogPipeline<T> {
        &self.pipeline
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.resolve(self.run().0)
    }

    pub fn sorted(&self) -> Vec<&T> {
        self.resolve(self.run().1)
    }

    /// The visible window of the sorted entities.
    pub fn display_items(&self) -> Vec<&T> {
        self.resolve(self.paginator.window(self.run().1))
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more()
    }

    /// Tag values across the whole catalog, not just the filtered part.
    pub fn available_tags(&self) -> Vec<TagGroup> {
        self.pipeline.available_tags(&self.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sort::{ALPHABETICAL, RELEVANCE};
    use crate::catalog::{NAME_WEIGHT, SearchField};

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        name: String,
        course: &'static str,
    }

    impl CatalogEntity for Dish {
        fn name(&self) -> &str {
            &self.name
        }

        fn search_fields(&self) -> Vec<SearchField<'_>> {
            vec![SearchField::new(self.name.as_str(), NAME_WEIGHT)]
        }
    }

    fn dish(name: impl Into<String>, course: &'static str) -> Dish {
        Dish {
            name: name.into(),
            course,
        }
    }

    fn course_values(dish: &Dish) -> Vec<&str> {
        vec![dish.course]
    }

    fn pipeline() -> CatalogPipeline<Dish> {
        CatalogPipeline::new(
            TagFilters::new().with("Categories", |d, v| d.course == v, course_values),
            Sorts::new().with("course", |a, b| a.course.cmp(b.course)),
        )
    }

    fn dishes() -> Vec<Dish> {
        vec![
            dish("Cherry Tart", "Dessert"),
            dish("Beef Stew", "Main"),
            dish("Apple Pie", "Dessert"),
        ]
    }

    fn names(items: &[&Dish]) -> Vec<String> {
        items.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn category_tag_then_alphabetical() {
        let dishes = dishes();
        let state = FilterState::default().with_tag(SelectedTag::new("Categories", "Dessert"));

        let output = pipeline().run(&dishes, &state);

        assert_eq!(names(&output.filtered), vec!["Cherry Tart", "Apple Pie"]);
        assert_eq!(names(&output.sorted), vec!["Apple Pie", "Cherry Tart"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let output = pipeline().run(&[], &FilterState::default().with_search_term("pie"));

        assert!(output.filtered.is_empty());
        assert!(output.sorted.is_empty());
    }

    #[test]
    fn search_term_and_fuzzy_tag_share_query() {
        let dishes = dishes();
        let by_term = pipeline().run(&dishes, &FilterState::default().with_search_term("stew"));
        let by_tag = pipeline().run(
            &dishes,
            &FilterState::default().with_tag(SelectedTag::fuzzy("stew")),
        );

        assert_eq!(names(&by_term.filtered), vec!["Beef Stew"]);
        assert_eq!(by_term, by_tag);
    }

    #[test]
    fn relevance_sort_keeps_filter_order() {
        let dishes = dishes();
        let state = FilterState::default().with_sort(RELEVANCE, SortOrder::Ascending);

        let output = pipeline().run(&dishes, &state);

        assert_eq!(output.sorted, output.filtered);
    }

    #[test]
    fn catalog_pages_and_resets_on_new_content() {
        let entities: Vec<Dish> = (0..7).map(|i| dish(format!("Dish {i}"), "Main")).collect();
        let mut catalog = Catalog::new(entities, pipeline()).with_page_size(3);

        assert_eq!(catalog.display_items().len(), 3);
        assert!(catalog.load_more());
        assert_eq!(catalog.display_items().len(), 6);

        // same filtered content, different order: page kept
        catalog.set_sort("course", SortOrder::Descending);
        assert_eq!(catalog.paginator().page(), 2);

        catalog.set_search_term("Dish 1");
        assert_eq!(catalog.paginator().page(), 1);
        assert_eq!(names(&catalog.display_items()), vec!["Dish 1"]);
        assert!(!catalog.has_more());
        assert!(!catalog.load_more());
    }

    #[test]
    fn reloading_identical_entities_keeps_page() {
        let entities: Vec<Dish> = (0..5).map(|i| dish(format!("Dish {i}"), "Main")).collect();
        let mut catalog = Catalog::new(entities.clone(), pipeline()).with_page_size(2);
        catalog.load_more();

        catalog.set_entities(entities);

        assert_eq!(catalog.paginator().page(), 2);
        assert_eq!(catalog.state().sort_by, ALPHABETICAL);
    }

    #[test]
    fn available_tags_cover_whole_catalog() {
        let mut catalog = Catalog::new(dishes(), pipeline());
        catalog.add_tag(SelectedTag::new("Categories", "Main"));

        let groups = catalog.available_tags();

        assert_eq!(catalog.filtered().len(), 1);
        assert_eq!(groups[0].values, vec!["Dessert", "Main"]);
    }
}
