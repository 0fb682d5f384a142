use chrono::Duration;
use comfort_index_domain::{CacheEntry, CityId, Observation};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use super::CacheCounters;
use crate::ports::Clock;

/// Per-city TTL cache of raw observations.
///
/// Lazy expiration only: a stale entry stays in the map until the next
/// successful fetch for that city overwrites it. Size is bounded by the
/// number of monitored cities, so nothing is ever evicted.
pub struct ObservationCache {
    entries: DashMap<CityId, CacheEntry<Observation>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    counters: CacheCounters,
}

impl ObservationCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
            counters: CacheCounters::new(),
        }
    }

    /// Returns the cached observation while `expires_at > now`.
    ///
    /// Never-fetched and expired cities both read as `None`.
    pub fn get(&self, city_id: &CityId) -> Option<Observation> {
        let now = self.clock.now();
        self.entries
            .get(city_id)
            .and_then(|entry| entry.fresh_value(now).cloned())
    }

    /// Creates or overwrites the entry with `expires_at = now + ttl`.
    pub fn put(&self, city_id: CityId, observation: Observation, ttl: Duration) {
        let entry = CacheEntry::new(observation, self.clock.now(), ttl);
        debug!(city_id = %city_id, expires_at = %entry.expires_at(), "Observation cached");
        self.entries.insert(city_id, entry);
    }

    /// `put` with the configured TTL.
    pub fn insert(&self, city_id: CityId, observation: Observation) {
        self.put(city_id, observation, self.ttl);
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Every city that has an entry, fresh or stale.
    pub fn keys(&self) -> Vec<CityId> {
        let mut keys: Vec<CityId> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Number of entries, stale ones included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn counters(&self) -> &CacheCounters {
        &self.counters
    }
}
