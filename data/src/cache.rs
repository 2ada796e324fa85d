//! In-memory TTL cache for static payloads
//!
//! Entries move through three states as they age: fresh (served as-is),
//! stale (served, but callers should refresh) and expired (dropped on read).

use std::collections::HashMap;
use std::time::{Duration, Instant};

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(60 * 60 * 24);

const DEFAULT_MAX_SIZE: usize = 1000;

/// Age thresholds and capacity for a [`MemoryCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Age below which an entry is fresh
    pub max_age: Duration,
    /// Age below which an entry is still usable but stale
    pub stale_age: Duration,
    /// Maximum number of entries before the oldest is evicted. Values
    /// below 1 behave as 1: the entry being written is always kept.
    pub max_size: usize,
}

impl CacheOptions {
    /// Truly static data (stats, types): 7 days fresh, 30 days stale
    pub const STATIC: CacheOptions = CacheOptions {
        max_age: Duration::from_secs(7 * 24 * 60 * 60),
        stale_age: Duration::from_secs(30 * 24 * 60 * 60),
        max_size: DEFAULT_MAX_SIZE,
    };

    /// Semi-static data (species info, forms): 1 day fresh, 7 days stale
    pub const SEMI_STATIC: CacheOptions = CacheOptions {
        max_age: DAY,
        stale_age: Duration::from_secs(7 * 24 * 60 * 60),
        max_size: DEFAULT_MAX_SIZE,
    };

    /// Session-only caching: 1 hour fresh, 4 hours stale
    pub const SESSION: CacheOptions = CacheOptions {
        max_age: HOUR,
        stale_age: Duration::from_secs(4 * 60 * 60),
        max_size: DEFAULT_MAX_SIZE,
    };

    /// Set the capacity, clamped to at least one entry
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size.max(1);
        self
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self::STATIC
    }
}

/// Freshness of a cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Fresh,
    Stale,
    Expired,
}

/// A cache hit along with its freshness
#[derive(Debug, Clone, PartialEq)]
pub struct CacheHit<T> {
    pub data: T,
    pub is_stale: bool,
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    inserted_at: Instant,
    // Insertion order, breaks timestamp ties during eviction
    sequence: u64,
}

/// Key-value cache with fresh/stale/expired aging
#[derive(Debug, Clone)]
pub struct MemoryCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
    options: CacheOptions,
    next_sequence: u64,
}

impl<T: Clone> MemoryCache<T> {
    /// Create a cache with the given options
    pub fn new(options: CacheOptions) -> Self {
        Self {
            entries: HashMap::new(),
            options,
            next_sequence: 0,
        }
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    fn status_of(&self, entry: &CacheEntry<T>) -> EntryStatus {
        let age = entry.inserted_at.elapsed();
        if age < self.options.max_age {
            EntryStatus::Fresh
        } else if age < self.options.stale_age {
            EntryStatus::Stale
        } else {
            EntryStatus::Expired
        }
    }

    /// Freshness of the entry under `key` without removing it
    pub fn status(&self, key: &str) -> EntryStatus {
        self.entries
            .get(key)
            .map(|entry| self.status_of(entry))
            .unwrap_or(EntryStatus::Expired)
    }

    fn evict_oldest(&mut self) {
        if self.entries.len() < self.options.max_size.max(1) {
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.inserted_at, entry.sequence))
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            tracing::debug!(key = %key, "evicting oldest cache entry");
            self.entries.remove(&key);
        }
    }

    /// Get a fresh or stale value
    pub fn get(&mut self, key: &str) -> Option<T> {
        self.get_with_status(key).map(|hit| hit.data)
    }

    /// Get a value along with whether it is stale; expired entries are removed
    pub fn get_with_status(&mut self, key: &str) -> Option<CacheHit<T>> {
        let status = self.status(key);

        if status == EntryStatus::Expired {
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| CacheHit {
            data: entry.data.clone(),
            is_stale: status == EntryStatus::Stale,
        })
    }

    /// Get a value regardless of age (for serving while revalidating)
    pub fn get_stale(&self, key: &str) -> Option<T> {
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    /// Insert a value, evicting the oldest entry when full
    pub fn set(&mut self, key: impl Into<String>, data: T) {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.evict_oldest();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(
            key,
            CacheEntry {
                data,
                inserted_at: Instant::now(),
                sequence,
            },
        );
    }

    /// Return the cached value or compute, store and return a new one
    pub fn get_or_insert_with<F>(&mut self, key: &str, fetch: F) -> T
    where
        F: FnOnce() -> T,
    {
        if let Some(data) = self.get(key) {
            return data;
        }

        let data = fetch();
        self.set(key, data.clone());
        data
    }

    /// Fallible variant of [`MemoryCache::get_or_insert_with`]; errors are not cached
    pub fn try_get_or_insert_with<F, E>(&mut self, key: &str, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(data) = self.get(key) {
            return Ok(data);
        }

        let data = fetch()?;
        self.set(key, data.clone());
        Ok(data)
    }

    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl<T: Clone> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn immediately_stale() -> CacheOptions {
        CacheOptions {
            max_age: Duration::ZERO,
            stale_age: HOUR,
            max_size: 10,
        }
    }

    fn immediately_expired() -> CacheOptions {
        CacheOptions {
            max_age: Duration::ZERO,
            stale_age: Duration::ZERO,
            max_size: 10,
        }
    }

    #[test]
    fn test_fresh_entry() {
        let mut cache = MemoryCache::new(CacheOptions::SESSION);
        cache.set("pokemon/25", 25u32);

        assert_eq!(cache.get("pokemon/25"), Some(25));
        assert_eq!(
            cache.get_with_status("pokemon/25"),
            Some(CacheHit {
                data: 25,
                is_stale: false
            })
        );
        assert!(cache.has("pokemon/25"));
        assert_eq!(cache.status("pokemon/25"), EntryStatus::Fresh);
    }

    #[test]
    fn test_stale_entry_is_served() {
        let mut cache = MemoryCache::new(immediately_stale());
        cache.set("move/surf", "surf".to_string());

        let hit = cache.get_with_status("move/surf").unwrap();
        assert!(hit.is_stale);
        assert_eq!(hit.data, "surf");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_removed() {
        let mut cache = MemoryCache::new(immediately_expired());
        cache.set("move/surf", 1u8);

        // Still visible to stale reads until a normal read drops it
        assert_eq!(cache.get_stale("move/surf"), Some(1));
        assert_eq!(cache.get("move/surf"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.get_stale("move/surf"), None);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut cache = MemoryCache::new(CacheOptions::STATIC.with_max_size(2));
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_zero_capacity_keeps_newest_entry() {
        assert_eq!(CacheOptions::STATIC.with_max_size(0).max_size, 1);

        let mut cache = MemoryCache::new(CacheOptions {
            max_size: 0,
            ..CacheOptions::STATIC
        });
        cache.set("a", 1);
        cache.set("b", 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let mut cache = MemoryCache::new(CacheOptions::STATIC.with_max_size(2));
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("b", 20);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), Some(20));
    }

    #[test]
    fn test_get_or_insert_with_fetches_once() {
        let mut cache = MemoryCache::default();
        let mut calls = 0;

        let first = cache.get_or_insert_with("type/fire", || {
            calls += 1;
            "fire".to_string()
        });
        let second = cache.get_or_insert_with("type/fire", || {
            calls += 1;
            "other".to_string()
        });

        assert_eq!(first, "fire");
        assert_eq!(second, "fire");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_try_get_or_insert_with_does_not_cache_errors() {
        let mut cache: MemoryCache<u32> = MemoryCache::default();

        let failed: Result<u32, &str> = cache.try_get_or_insert_with("k", || Err("offline"));
        assert_eq!(failed, Err("offline"));
        assert!(cache.is_empty());

        let ok: Result<u32, &str> = cache.try_get_or_insert_with("k", || Ok(7));
        assert_eq!(ok, Ok(7));
        assert_eq!(cache.get("k"), Some(7));
    }

    #[test]
    fn test_delete_clear_keys() {
        let mut cache = MemoryCache::default();
        cache.set("a", 1);
        cache.set("b", 2);

        let mut keys = cache.keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);

        assert!(cache.delete("a"));
        assert!(!cache.delete("a"));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_presets() {
        assert_eq!(CacheOptions::default(), CacheOptions::STATIC);
        assert_eq!(CacheOptions::SEMI_STATIC.max_age, DAY);
        assert_eq!(CacheOptions::SESSION.max_age, HOUR);
        assert!(CacheOptions::SESSION.stale_age > CacheOptions::SESSION.max_age);
    }
}
