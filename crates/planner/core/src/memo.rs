//! Last-arguments memoization.
//!
//! Recomputes only when the key differs from the previous call. Keys are
//! compared by value, so a rebuilt-but-identical input is still a hit.

/// Single-slot cache remembering the most recent `(key, value)` pair.
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
}

impl<K, V> Memo<K, V> {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Most recently computed value, if any.
    pub fn value(&self) -> Option<&V> {
        self.last.as_ref().map(|(_, value)| value)
    }

    /// Key the current value was computed for, if any.
    pub fn key(&self) -> Option<&K> {
        self.last.as_ref().map(|(key, _)| key)
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Returns the cached value for `key`, computing it if the key changed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        if !self.is_current(&key) {
            self.last = None;
        }
        let (_, value) = self.last.get_or_insert_with(|| {
            let value = compute(&key);
            (key, value)
        });
        value
    }

    /// True when `key` would be served from the cache.
    pub fn is_current(&self, key: &K) -> bool {
        self.key().is_some_and(|last| last == key)
    }
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_key_skips_recompute() {
        let mut memo = Memo::new();
        let mut calls = 0;

        for _ in 0..3 {
            let value = *memo.get_or_compute(vec![1, 2], |k| {
                calls += 1;
                k.len()
            });
            assert_eq!(value, 2);
        }

        assert_eq!(calls, 1);
    }

    #[test]
    fn changed_key_recomputes() {
        let mut memo = Memo::new();

        assert_eq!(*memo.get_or_compute(2, |k| k * 10), 20);
        assert_eq!(*memo.get_or_compute(3, |k| k * 10), 30);
        assert!(memo.is_current(&3));
        assert!(!memo.is_current(&2));
    }

    #[test]
    fn returning_to_earlier_key_recomputes() {
        let mut memo = Memo::new();
        let mut calls = 0;

        for key in ["a", "b", "a"] {
            memo.get_or_compute(key, |k| {
                calls += 1;
                k.len()
            });
        }

        assert_eq!(calls, 3);
        assert_eq!(memo.key(), Some(&"a"));
    }

    #[test]
    fn clear_forgets_value() {
        let mut memo = Memo::new();
        memo.get_or_compute("a", |_| 1);

        memo.clear();

        assert_eq!(memo.value(), None);
        assert_eq!(memo.key(), None);
    }
}
