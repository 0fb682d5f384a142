use chrono::{DateTime, Duration, Utc};
use comfort_index_domain::CityId;
use std::sync::Arc;

use crate::services::{ObservationCache, RankingCache};

#[derive(Debug, Clone, PartialEq)]
pub struct ObservationCacheStatus {
    pub keys: Vec<CityId>,
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    pub ttl: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingCacheStatus {
    pub has_data: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_valid: bool,
    pub hits: u64,
    pub misses: u64,
    pub ttl: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheStatus {
    pub observations: ObservationCacheStatus,
    pub ranking: RankingCacheStatus,
}

/// Reads both cache tiers for the diagnostics endpoint. Never mutates them.
pub struct GetCacheStatusUseCase {
    observations: Arc<ObservationCache>,
    ranking: Arc<RankingCache>,
}

impl GetCacheStatusUseCase {
    pub fn new(observations: Arc<ObservationCache>, ranking: Arc<RankingCache>) -> Self {
        Self {
            observations,
            ranking,
        }
    }

    pub fn execute(&self) -> CacheStatus {
        let snapshot = self.ranking.info();

        CacheStatus {
            observations: ObservationCacheStatus {
                keys: self.observations.keys(),
                size: self.observations.size(),
                hits: self.observations.counters().hits(),
                misses: self.observations.counters().misses(),
                ttl: self.observations.ttl(),
            },
            ranking: RankingCacheStatus {
                has_data: snapshot.has_data,
                expires_at: snapshot.expires_at,
                is_valid: snapshot.is_valid,
                hits: self.ranking.counters().hits(),
                misses: self.ranking.counters().misses(),
                ttl: self.ranking.ttl(),
            },
        }
    }
}
