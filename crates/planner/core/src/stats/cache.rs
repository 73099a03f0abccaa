//! Bounded memoization of derived stats keyed by attribute triple.

use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::attributes::BaseAttributes;
use crate::config::PlannerConfig;
use crate::stats::config::{DERIVED_STAT_TABLE, DerivedStatConfig};
use crate::stats::derived::{DerivedStat, calculate_all_derived_stats};

/// Hit/miss counters for a [`DerivedStatCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub capacity: usize,
    pub len: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache (0.0 when unused).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of derived stats for one stat table.
///
/// The engine itself is pure, so caching is purely a performance concern:
/// a hit returns exactly what [`calculate_all_derived_stats`] would.
pub struct DerivedStatCache {
    table: Cow<'static, [DerivedStatConfig]>,
    entries: LruCache<BaseAttributes, Arc<[DerivedStat]>>,
    hits: u64,
    misses: u64,
}

impl DerivedStatCache {
    /// Creates a cache over `table` holding at most `capacity` triples.
    ///
    /// A capacity of 0 is treated as 1.
    pub fn new(table: impl Into<Cow<'static, [DerivedStatConfig]>>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            table: table.into(),
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cache over [`DERIVED_STAT_TABLE`] with the default capacity.
    pub fn with_defaults() -> Self {
        Self::new(DERIVED_STAT_TABLE, PlannerConfig::DEFAULT_CACHE_CAPACITY)
    }

    /// Returns the derived stats for `base`, computing them on a miss.
    pub fn get(&mut self, base: &BaseAttributes) -> Arc<[DerivedStat]> {
        if let Some(hit) = self.entries.get(base).cloned() {
            self.hits += 1;
            return hit;
        }

        self.misses += 1;
        tracing::debug!(?base, "Derived stat cache miss");

        let computed: Arc<[DerivedStat]> = calculate_all_derived_stats(base, &self.table).into();
        self.entries.put(*base, Arc::clone(&computed));
        computed
    }

    pub fn table(&self) -> &[DerivedStatConfig] {
        &self.table
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            capacity: self.entries.cap().get(),
            len: self.entries.len(),
        }
    }

    /// Drops every cached entry; counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for DerivedStatCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::config::{StatCategory, StatWeights};

    #[test]
    fn repeated_lookup_hits_cache() {
        let mut cache = DerivedStatCache::with_defaults();
        let base = BaseAttributes::uniform(120);

        let first = cache.get(&base);
        let second = cache.get(&base);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hit_rate(), 0.5);
    }

    #[test]
    fn cached_values_match_direct_computation() {
        let mut cache = DerivedStatCache::with_defaults();
        let base = BaseAttributes::new(130, 150, 90);

        let cached = cache.get(&base);

        assert_eq!(
            &cached[..],
            calculate_all_derived_stats(&base, DERIVED_STAT_TABLE).as_slice()
        );
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = DerivedStatCache::new(DERIVED_STAT_TABLE, 2);
        let a = BaseAttributes::uniform(100);
        let b = BaseAttributes::uniform(110);
        let c = BaseAttributes::uniform(120);

        cache.get(&a);
        cache.get(&b);
        cache.get(&a); // a is now most recent
        cache.get(&c); // evicts b
        cache.get(&b); // miss again

        let stats = cache.stats();
        assert_eq!(stats.len, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 4);
    }

    #[test]
    fn owned_table_is_supported() {
        let table = vec![DerivedStatConfig::new(
            "Only",
            StatCategory::Movement,
            true,
            1.0,
            0.0,
            StatWeights::new(0.0, 0.0, 1.0),
            "",
        )];
        let mut cache = DerivedStatCache::new(table, 0);

        let stats = cache.get(&BaseAttributes::new(0, 49, 0));

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].value, 7);
        assert_eq!(cache.stats().capacity, 1);
    }
}
