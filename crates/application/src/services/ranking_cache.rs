use arc_swap::ArcSwapOption;
use chrono::{DateTime, Duration, Utc};
use comfort_index_domain::{CacheEntry, ComfortRecord};
use std::sync::Arc;
use tracing::debug;

use super::CacheCounters;
use crate::ports::Clock;

pub type Ranking = Arc<Vec<ComfortRecord>>;

/// The single aggregate snapshot of the ranked comfort list.
///
/// Replaced atomically via `ArcSwapOption` on every refresh, so readers
/// never observe a partially written ranking.
pub struct RankingCache {
    snapshot: ArcSwapOption<CacheEntry<Ranking>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    counters: CacheCounters,
}

/// Point-in-time view of the aggregate tier for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingSnapshotInfo {
    pub has_data: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_valid: bool,
}

impl RankingCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot: ArcSwapOption::empty(),
            ttl,
            clock,
            counters: CacheCounters::new(),
        }
    }

    /// The cached ranking, if one exists and has not expired.
    pub fn get(&self) -> Option<Ranking> {
        let now = self.clock.now();
        self.snapshot
            .load_full()
            .and_then(|entry| entry.fresh_value(now).cloned())
    }

    /// Replaces the snapshot with `records`, expiring one TTL from now.
    pub fn store(&self, records: Vec<ComfortRecord>) -> Ranking {
        let ranking: Ranking = Arc::new(records);
        let entry = CacheEntry::new(Arc::clone(&ranking), self.clock.now(), self.ttl);
        debug!(
            cities = ranking.len(),
            expires_at = %entry.expires_at(),
            "Comfort ranking cached"
        );
        self.snapshot.store(Some(Arc::new(entry)));
        ranking
    }

    pub fn info(&self) -> RankingSnapshotInfo {
        let now = self.clock.now();
        match self.snapshot.load_full() {
            Some(entry) => RankingSnapshotInfo {
                has_data: true,
                expires_at: Some(entry.expires_at()),
                is_valid: entry.is_fresh(now),
            },
            None => RankingSnapshotInfo {
                has_data: false,
                expires_at: None,
                is_valid: false,
            },
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn counters(&self) -> &CacheCounters {
        &self.counters
    }
}
