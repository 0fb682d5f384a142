use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Cache lifetimes for both tiers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Per-city observation TTL in seconds (default: 300)
    #[serde(default = "default_ttl_secs")]
    pub raw_ttl_secs: u64,

    /// Ranked comfort list TTL in seconds (default: 300)
    #[serde(default = "default_ttl_secs")]
    pub aggregate_ttl_secs: u64,
}

/// Upper bound accepted by `Config::validate` for either TTL (one day).
pub const MAX_TTL_SECS: u64 = 86_400;

impl CacheConfig {
    pub fn raw_ttl(&self) -> Duration {
        Duration::seconds(self.raw_ttl_secs as i64)
    }

    pub fn aggregate_ttl(&self) -> Duration {
        Duration::seconds(self.aggregate_ttl_secs as i64)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            raw_ttl_secs: default_ttl_secs(),
            aggregate_ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    300
}
