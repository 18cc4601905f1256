//! Chart memoization keyed by (birth moment, gender).

use std::collections::HashMap;

use parking_lot::Mutex;
use saju_base::Gender;
use saju_search::Chart;
use saju_time::CivilTime;
use serde::Serialize;
use tracing::trace;

/// Cache key. The person's name only affects the report, so it is not
/// part of the key.
pub type ChartKey = (CivilTime, Gender);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct CacheInner {
    charts: HashMap<ChartKey, Chart>,
    hits: u64,
    misses: u64,
}

/// Entries held by [`ChartCache::new`].
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Thread-safe chart cache.
///
/// Charts are pure functions of their key under a fixed configuration
/// and ephemeris, so entries never go stale. The cache holds at most
/// `capacity` charts; inserting into a full cache evicts an arbitrary
/// entry.
#[derive(Debug)]
pub struct ChartCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl Default for ChartCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache bounded to `capacity` charts (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::default(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached chart for `key`, computing and storing it on a miss.
    /// Failures are returned and not cached.
    pub fn get_or_try_insert<E>(
        &self,
        key: ChartKey,
        compute: impl FnOnce() -> Result<Chart, E>,
    ) -> Result<Chart, E> {
        {
            let mut inner = self.inner.lock();
            if let Some(chart) = inner.charts.get(&key).cloned() {
                inner.hits += 1;
                trace!(birth = %key.0, "chart cache hit");
                return Ok(chart);
            }
            inner.misses += 1;
        }
        // Computed outside the lock; a racing miss on the same key just
        // recomputes the same value.
        let chart = compute()?;
        let mut inner = self.inner.lock();
        if inner.charts.len() >= self.capacity && !inner.charts.contains_key(&key) {
            let victim = inner.charts.keys().next().copied();
            if let Some(victim) = victim {
                inner.charts.remove(&victim);
                trace!(birth = %victim.0, "chart cache eviction");
            }
        }
        inner.charts.insert(key, chart.clone());
        Ok(chart)
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.charts.len(),
        }
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.charts.clear();
        inner.hits = 0;
        inner.misses = 0;
    }
}
