use chrono::{DateTime, Duration, Utc};

/// A cached value with an absolute expiry.
///
/// Entries are immutable: a refresh replaces the whole entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    value: T,
    expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now + ttl,
        }
    }

    /// Usable iff `now < expires_at`.
    #[inline]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the value only while fresh.
    pub fn fresh_value(&self, now: DateTime<Utc>) -> Option<&T> {
        self.is_fresh(now).then_some(&self.value)
    }
}
