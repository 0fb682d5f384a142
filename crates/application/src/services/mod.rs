pub mod counters;
pub mod observation_cache;
pub mod ranking_cache;

pub use counters::CacheCounters;
pub use observation_cache::ObservationCache;
pub use ranking_cache::RankingCache;
