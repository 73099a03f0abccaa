/// Planner configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Number of catalog entries materialized per page.
    pub page_size: usize,

    /// Starting value for every attribute when no known race is selected.
    pub default_starting_stat: i32,

    /// Number of distinct attribute triples kept by the derived-stat cache.
    pub cache_capacity: usize,

    pub search: SearchConfig,
}

impl PlannerConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PAGE_SIZE: usize = 50;
    pub const DEFAULT_STARTING_STAT: i32 = 100;
    pub const DEFAULT_CACHE_CAPACITY: usize = 32;

    pub fn new() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            default_starting_stat: Self::DEFAULT_STARTING_STAT,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            search: SearchConfig::default(),
        }
    }

    /// Returns a copy with the given page size (at least 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fuzzy search tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Minimum relevance in `[0, 1]` an entity needs to survive a search.
    pub min_relevance: f64,
}

impl SearchConfig {
    pub const DEFAULT_MIN_RELEVANCE: f64 = 0.25;

    pub const fn new(min_relevance: f64) -> Self {
        Self { min_relevance }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_RELEVANCE)
    }
}
