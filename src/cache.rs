//! Memoizing factory for line adapters.
//!
//! Creating a fresh `LinePoints` every time a shape is redrawn produces a lot of
//! short-lived vectors. `AdapterCache` hands out one shared instance per
//! distinct `Line` instead.
//!
//! The cache is an ordinary value: create one per process (or per test) and
//! pass it to whatever needs it. Entries are never evicted.

use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;
use tracing::{debug, trace};

use crate::adapter::LinePoints;
use crate::error::GeometryError;
use crate::geometry::{Line, Point};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Hit/miss counters for an `AdapterCache`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Thread-safe, unbounded `Line -> Arc<LinePoints>` cache.
///
/// The map is sharded, so lookups for keys in different shards never wait on
/// each other. A miss builds the product while holding the entry for its key,
/// which guarantees at most one construction per distinct line.
#[derive(Debug, Default)]
pub struct AdapterCache {
    entries: DashMap<Line, Arc<LinePoints>, FxBuildHasher>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AdapterCache {
    pub fn new() -> Self {
        AdapterCache {
            entries: DashMap::with_hasher(FxBuildHasher::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached adapter for `line`, building it on first request.
    ///
    /// Equal lines always get the same `Arc` back (`Arc::ptr_eq` holds).
    /// Rasterization failures are returned and nothing is cached for them.
    pub fn get_or_create(&self, line: Line) -> Result<Arc<LinePoints>, GeometryError> {
        if let Some(cached) = self.entries.get(&line) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(%line, "adapter cache hit");
            return Ok(Arc::clone(cached.value()));
        }

        match self.entries.entry(line) {
            // Another caller won the race between `get` and `entry`.
            Entry::Occupied(occupied) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(%line, "adapter cache hit");
                Ok(Arc::clone(occupied.get()))
            }
            Entry::Vacant(vacant) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let adapter = Arc::new(LinePoints::rasterize(line)?);
                debug!(%line, points = adapter.len(), "adapter cache miss, created adapter");
                vacant.insert(Arc::clone(&adapter));
                Ok(adapter)
            }
        }
    }

    /// Shorthand for `get_or_create(Line::new(start, end))`.
    pub fn new_adapter(
        &self,
        start: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Result<Arc<LinePoints>, GeometryError> {
        self.get_or_create(Line::new(start.into(), end.into()))
    }

    pub fn contains(&self, line: &Line) -> bool {
        self.entries.contains_key(line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_same_line_same_instance() {
        let cache = AdapterCache::new();
        let adapter_1 = cache.new_adapter((2, 4), (6, 4)).unwrap();
        let adapter_2 = cache.new_adapter((2, 4), (6, 4)).unwrap();
        assert!(Arc::ptr_eq(&adapter_1, &adapter_2));

        let adapter_3 = cache.new_adapter((2, 4), (7, 4)).unwrap();
        let adapter_4 = cache.new_adapter((2, 4), (7, 4)).unwrap();
        assert!(!Arc::ptr_eq(&adapter_3, &adapter_1));
        assert!(Arc::ptr_eq(&adapter_3, &adapter_4));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats(), CacheStats { hits: 2, misses: 2 });
    }

    #[test]
    fn test_reversed_line_is_separate_entry() {
        let cache = AdapterCache::new();
        let forward = cache.new_adapter((1, 6), (4, 6)).unwrap();
        let backward = cache.new_adapter((4, 6), (1, 6)).unwrap();

        assert!(!Arc::ptr_eq(&forward, &backward));
        assert_eq!(forward.points(), backward.points());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_fresh_caches_are_independent() {
        let first = AdapterCache::new();
        let second = AdapterCache::new();
        let a = first.new_adapter((0, 0), (0, 5)).unwrap();
        let b = second.new_adapter((0, 0), (0, 5)).unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(second.stats().misses, 1);
    }

    #[test]
    fn test_diagonal_is_not_cached() {
        let cache = AdapterCache::new();
        let diagonal = Line::new(Point::new(0, 0), Point::new(3, 3));

        assert!(cache.get_or_create(diagonal).is_err());
        assert!(cache.get_or_create(diagonal).is_err());
        assert!(!cache.contains(&diagonal));
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_concurrent_callers_share_one_instance() {
        let cache = AdapterCache::new();
        let line = Line::new(Point::new(0, 0), Point::new(1000, 0));

        let adapters: Vec<Arc<LinePoints>> = (0..64)
            .into_par_iter()
            .map(|_| cache.get_or_create(line).unwrap())
            .collect();

        assert!(adapters.iter().all(|a| Arc::ptr_eq(a, &adapters[0])));
        assert_eq!(cache.stats(), CacheStats { hits: 63, misses: 1 });
        assert_eq!(cache.stats().lookups(), 64);
    }

    #[test]
    fn test_concurrent_distinct_keys() {
        let cache = AdapterCache::new();

        (0..200).into_par_iter().for_each(|i| {
            let adapter = cache.new_adapter((0, i % 50), (10, i % 50)).unwrap();
            assert_eq!(adapter.len(), 11);
        });

        assert_eq!(cache.len(), 50);
        assert_eq!(cache.stats().misses, 50);
    }
}
