use chrono::{DateTime, Utc};

/// Wall clock used for cache expiry. Injected so tests can move time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
