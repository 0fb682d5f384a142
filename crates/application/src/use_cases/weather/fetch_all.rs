use comfort_index_domain::{CityId, DomainError, Observation};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::ports::{CityListProvider, WeatherProvider};
use crate::services::ObservationCache;

/// Weather fetcher: one observation per monitored city, read through the
/// per-city observation cache.
///
/// Per-city failures are absorbed here. A city whose fetch fails is logged and
/// left out of the result; it never fails the call or holds back other cities.
pub struct FetchWeatherUseCase {
    provider: Arc<dyn WeatherProvider>,
    cities: Arc<dyn CityListProvider>,
    cache: Arc<ObservationCache>,
    max_concurrent: usize,
}

impl FetchWeatherUseCase {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        cities: Arc<dyn CityListProvider>,
        cache: Arc<ObservationCache>,
    ) -> Self {
        Self {
            provider,
            cities,
            cache,
            max_concurrent: 0,
        }
    }

    /// Caps how many cities are fetched at once. 0 fans out to every city.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Fetches every city from the configured city list.
    ///
    /// # Errors
    ///
    /// Only when the city list itself cannot be read. Upstream failures
    /// shrink the result instead.
    #[instrument(skip(self), name = "fetch_weather_all_cities")]
    pub async fn execute(&self) -> Result<Vec<Observation>, DomainError> {
        let city_ids = self.cities.city_ids().await?;
        Ok(self.fetch_all(&city_ids).await)
    }

    /// Fetches the given cities concurrently. Result order is completion
    /// order, not input order.
    pub async fn fetch_all(&self, city_ids: &[CityId]) -> Vec<Observation> {
        let limit = match self.max_concurrent {
            0 => city_ids.len().max(1),
            n => n,
        };

        let observations: Vec<Observation> = stream::iter(city_ids.iter().cloned())
            .map(|city_id| self.fetch_one(city_id))
            .buffer_unordered(limit)
            .filter_map(|outcome| async move { outcome })
            .collect()
            .await;

        let failed = city_ids.len().saturating_sub(observations.len());
        if failed > 0 {
            info!(
                requested = city_ids.len(),
                fetched = observations.len(),
                failed,
                "Weather fetch completed with missing cities"
            );
        } else {
            debug!(fetched = observations.len(), "Weather fetch completed");
        }

        observations
    }

    async fn fetch_one(&self, city_id: CityId) -> Option<Observation> {
        if let Some(observation) = self.cache.get(&city_id) {
            self.cache.counters().record_hit();
            debug!(city_id = %city_id, "Observation cache hit");
            return Some(observation);
        }

        self.cache.counters().record_miss();
        debug!(
            city_id = %city_id,
            provider = self.provider.provider_name(),
            "Observation cache miss, fetching upstream"
        );

        match self.provider.fetch(&city_id).await {
            Ok(observation) => {
                self.cache.insert(city_id, observation.clone());
                Some(observation)
            }
            Err(e) => {
                error!(city_id = %city_id, error = %e, "Failed to fetch weather for city");
                None
            }
        }
    }

    pub fn cache(&self) -> &Arc<ObservationCache> {
        &self.cache
    }
}
