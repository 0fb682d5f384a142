use comfort_index_application::use_cases::CacheStatus;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct RawCacheResponse {
    pub keys: Vec<String>,
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    pub ttl_ms: i64,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCacheResponse {
    pub has_data: bool,
    /// Epoch milliseconds; 0 before the first ranking is cached.
    pub expires_at: i64,
    pub is_valid: bool,
    pub hits: u64,
    pub misses: u64,
    #[serde(rename = "ttl_ms")]
    pub ttl_ms: i64,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatusResponse {
    pub raw_cache: RawCacheResponse,
    pub processed_cache: ProcessedCacheResponse,
}

impl From<CacheStatus> for CacheStatusResponse {
    fn from(status: CacheStatus) -> Self {
        let raw = status.observations;
        let ranking = status.ranking;

        Self {
            raw_cache: RawCacheResponse {
                keys: raw.keys.iter().map(ToString::to_string).collect(),
                size: raw.size,
                hits: raw.hits,
                misses: raw.misses,
                ttl_ms: raw.ttl.num_milliseconds(),
            },
            processed_cache: ProcessedCacheResponse {
                has_data: ranking.has_data,
                expires_at: ranking
                    .expires_at
                    .map(|t| t.timestamp_millis())
                    .unwrap_or(0),
                is_valid: ranking.is_valid,
                hits: ranking.hits,
                misses: ranking.misses,
                ttl_ms: ranking.ttl.num_milliseconds(),
            },
        }
    }
}
