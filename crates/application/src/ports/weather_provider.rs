use async_trait::async_trait;
use comfort_index_domain::{CityId, DomainError, Observation};

/// Source of current weather observations, one city per call.
///
/// Implementations normalize the upstream payload into a fully populated
/// [`Observation`]. Any failure (transport, status, payload) is reported as a
/// per-city [`DomainError`]; callers decide whether it is fatal.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, city_id: &CityId) -> Result<Observation, DomainError>;

    fn provider_name(&self) -> &'static str {
        "unknown"
    }
}
