//! Character sheet: resolver + derived-stat engine behind explicit caches.
//!
//! Front ends call into a `StatSheet` on every edit of the build. The base
//! attributes are memoized on the last build snapshot, and derived stats on
//! the resolved attribute triple, so re-rendering an unchanged build does no
//! arithmetic at all.

use std::borrow::Cow;
use std::sync::Arc;

use crate::attributes::{BaseAttributes, Build, RaceTable, resolve_with_default};
use crate::config::PlannerConfig;
use crate::memo::Memo;
use crate::stats::{CacheStats, DERIVED_STAT_TABLE, DerivedStat, DerivedStatCache, DerivedStatConfig};

/// Cached view of a build's base and derived stats.
pub struct StatSheet {
    races: RaceTable,
    default_stat: i32,
    base: Memo<Build, BaseAttributes>,
    derived: DerivedStatCache,
}

impl StatSheet {
    /// Sheet over `races` with the default table and configuration.
    pub fn new(races: RaceTable) -> Self {
        Self::with_config(races, &PlannerConfig::default())
    }

    pub fn with_config(races: RaceTable, config: &PlannerConfig) -> Self {
        Self {
            races,
            default_stat: config.default_starting_stat,
            base: Memo::new(),
            derived: DerivedStatCache::new(DERIVED_STAT_TABLE, config.cache_capacity),
        }
    }

    /// Replaces the derived-stat table, dropping cached results.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<Cow<'static, [DerivedStatConfig]>>) -> Self {
        let capacity = self.derived.stats().capacity;
        self.derived = DerivedStatCache::new(table, capacity);
        self
    }

    pub fn races(&self) -> &RaceTable {
        &self.races
    }

    pub fn table(&self) -> &[DerivedStatConfig] {
        self.derived.table()
    }

    /// Base attributes of `build`; unknown races fall back to the defaults.
    pub fn base_attributes(&mut self, build: &Build) -> BaseAttributes {
        let races = &self.races;
        let default_stat = self.default_stat;
        *self
            .base
            .get_or_compute(build.clone(), |build| resolve_with_default(build, races, default_stat))
    }

    /// Derived stats of `build`, in table order.
    pub fn derived_stats(&mut self, build: &Build) -> Arc<[DerivedStat]> {
        let base = self.base_attributes(build);
        self.derived.get(&base)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.derived.stats()
    }
}
