use async_trait::async_trait;
use comfort_index_domain::{CityId, DomainError};

/// Supplies the ordered, deduplicated list of monitored cities.
#[async_trait]
pub trait CityListProvider: Send + Sync {
    async fn city_ids(&self) -> Result<Vec<CityId>, DomainError>;
}
