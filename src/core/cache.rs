//! Cache occupancy: the cache seam, an in-memory cache, and snapshots

use dashmap::DashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Occupancy queries a cache must answer to be reported on
pub trait CacheStats {
    /// Key used in structured documents, e.g. `geometry_cache`
    fn name(&self) -> &str;

    /// Prefix for the size line, e.g. `Geometry` in "Geometry cache size in bytes"
    fn title(&self) -> &str;

    /// What the entries are called, e.g. `Geometries` in "Geometries in cache"
    fn item_label(&self) -> &str;

    fn len(&self) -> usize;

    /// Bytes currently held
    fn total_cost(&self) -> u64;

    /// Configured capacity in megabytes
    fn max_size_mb(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Naming for a cache instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLabels {
    pub name: String,
    pub title: String,
    pub item_label: String,
}

impl CacheLabels {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        item_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            item_label: item_label.into(),
        }
    }

    pub fn geometry() -> Self {
        Self::new("geometry_cache", "Geometry", "Geometries")
    }

    pub fn nef() -> Self {
        Self::new("cgal_cache", "CGAL", "CGAL Polyhedrons")
    }
}

/// Byte-costed cache bounded by a megabyte budget.
///
/// Inserts that would push the total cost past the budget are refused.
pub struct MemoryCache<K, V>
where
    K: Eq + Hash,
{
    labels: CacheLabels,
    entries: DashMap<K, (V, u64)>,
    total_cost: AtomicU64,
    max_size_mb: u64,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(labels: CacheLabels, max_size_mb: u64) -> Self {
        Self {
            labels,
            entries: DashMap::new(),
            total_cost: AtomicU64::new(0),
            max_size_mb,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.0.clone())
    }

    /// Insert `value` charged at `cost` bytes, returning whether it was kept
    pub fn insert(&self, key: K, value: V, cost: u64) -> bool {
        let budget = self.max_size_mb.saturating_mul(BYTES_PER_MB);
        let replaced = self.entries.get(&key).map(|entry| entry.1).unwrap_or(0);
        let current = self.total_cost.load(Ordering::Acquire);
        let fits = current
            .saturating_sub(replaced)
            .checked_add(cost)
            .is_some_and(|total| total <= budget);
        if !fits {
            tracing::debug!(
                cache = %self.labels.name,
                cost,
                budget,
                "refusing cache insert over budget"
            );
            return false;
        }
        if let Some((_, (_, old))) = self.entries.remove(&key) {
            self.total_cost.fetch_sub(old, Ordering::AcqRel);
        }
        self.entries.insert(key, (value, cost));
        self.total_cost.fetch_add(cost, Ordering::AcqRel);
        true
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, (value, cost))| {
            self.total_cost.fetch_sub(cost, Ordering::AcqRel);
            value
        })
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.total_cost.store(0, Ordering::Release);
    }
}

impl<K, V> CacheStats for MemoryCache<K, V>
where
    K: Eq + Hash,
{
    fn name(&self) -> &str {
        &self.labels.name
    }

    fn title(&self) -> &str {
        &self.labels.title
    }

    fn item_label(&self) -> &str {
        &self.labels.item_label
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn total_cost(&self) -> u64 {
        self.total_cost.load(Ordering::Acquire)
    }

    fn max_size_mb(&self) -> u64 {
        self.max_size_mb
    }
}

/// Occupancy of one cache, taken at query time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSnapshot {
    pub name: String,
    pub title: String,
    pub item_label: String,
    pub entry_count: usize,
    pub bytes_used: u64,
    pub byte_capacity: u64,
}

impl CacheSnapshot {
    pub fn of(cache: &dyn CacheStats) -> Self {
        Self {
            name: cache.name().to_string(),
            title: cache.title().to_string(),
            item_label: cache.item_label().to_string(),
            entry_count: cache.len(),
            bytes_used: cache.total_cost(),
            byte_capacity: cache.max_size_mb().saturating_mul(BYTES_PER_MB),
        }
    }
}

/// The caches a report may describe, injected by the caller.
///
/// A cache left as `None` (e.g. no nef backend in this build) is omitted
/// from every report.
#[derive(Clone, Copy, Default)]
pub struct CacheSet<'a> {
    pub geometry: Option<&'a dyn CacheStats>,
    pub nef: Option<&'a dyn CacheStats>,
}

impl<'a> CacheSet<'a> {
    pub fn new(geometry: Option<&'a dyn CacheStats>, nef: Option<&'a dyn CacheStats>) -> Self {
        Self { geometry, nef }
    }

    /// Snapshots of the available caches, geometry first
    pub fn snapshots(&self) -> Vec<CacheSnapshot> {
        [self.geometry, self.nef]
            .into_iter()
            .flatten()
            .map(CacheSnapshot::of)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_retrieve() {
        let cache: MemoryCache<String, u32> = MemoryCache::new(CacheLabels::geometry(), 1);
        assert!(cache.insert("cube".to_string(), 42, 100));
        assert_eq!(cache.get(&"cube".to_string()), Some(42));
        assert_eq!(cache.get(&"sphere".to_string()), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.total_cost(), 100);
    }

    #[test]
    fn test_budget_limit() {
        let cache: MemoryCache<u32, ()> = MemoryCache::new(CacheLabels::geometry(), 1);
        assert!(cache.insert(1, (), BYTES_PER_MB - 10));
        assert!(!cache.insert(2, (), 20));
        assert_eq!(cache.len(), 1);

        // Replacing an entry only charges the difference
        assert!(cache.insert(1, (), BYTES_PER_MB));
        assert_eq!(cache.total_cost(), BYTES_PER_MB);
    }

    #[test]
    fn test_remove_and_clear() {
        let cache: MemoryCache<u32, u32> = MemoryCache::new(CacheLabels::nef(), 4);
        cache.insert(1, 10, 64);
        cache.insert(2, 20, 32);
        assert_eq!(cache.remove(&1), Some(10));
        assert_eq!(cache.total_cost(), 32);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.total_cost(), 0);
    }

    #[test]
    fn test_snapshot_converts_megabytes() {
        let cache: MemoryCache<u32, u32> = MemoryCache::new(CacheLabels::geometry(), 100);
        cache.insert(7, 7, 2048);
        let snapshot = CacheSnapshot::of(&cache);
        assert_eq!(snapshot.name, "geometry_cache");
        assert_eq!(snapshot.entry_count, 1);
        assert_eq!(snapshot.bytes_used, 2048);
        assert_eq!(snapshot.byte_capacity, 100 * 1024 * 1024);
    }

    #[test]
    fn test_huge_capacity_saturates() {
        let cache: MemoryCache<u32, u32> =
            MemoryCache::new(CacheLabels::geometry(), 20_000_000_000_000);
        assert!(cache.insert(1, 1, 10));
        assert!(cache.insert(2, 2, u64::MAX - 10));
        assert!(!cache.insert(3, 3, 1));

        let snapshot = CacheSnapshot::of(&cache);
        assert_eq!(snapshot.byte_capacity, u64::MAX);
        assert_eq!(snapshot.entry_count, 2);
    }

    #[test]
    fn test_missing_cache_is_omitted() {
        let nef: MemoryCache<u32, u32> = MemoryCache::new(CacheLabels::nef(), 8);
        let set = CacheSet::new(None, Some(&nef));
        let snapshots = set.snapshots();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].name, "cgal_cache");

        assert!(CacheSet::default().snapshots().is_empty());
    }
}
