use comfort_index_api::AppState;
use comfort_index_application::ports::{CityListProvider, Clock, WeatherProvider};
use comfort_index_application::services::{ObservationCache, RankingCache};
use comfort_index_application::use_cases::{
    FetchWeatherUseCase, GetCacheStatusUseCase, GetComfortRankingUseCase,
};
use comfort_index_domain::Config;
use comfort_index_infrastructure::cities::JsonCityListProvider;
use comfort_index_infrastructure::system::SystemClock;
use comfort_index_infrastructure::weather::OpenWeatherClient;
use std::sync::Arc;
use tracing::info;

/// Process-wide service graph. Built once at startup; both caches live as
/// long as the process.
pub struct Services {
    pub fetch_weather: Arc<FetchWeatherUseCase>,
    pub get_ranking: Arc<GetComfortRankingUseCase>,
    pub get_cache_status: Arc<GetCacheStatusUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(&config.weather)?);
        let cities: Arc<dyn CityListProvider> = Arc::new(JsonCityListProvider::from_path(
            &config.cities.path,
            config.cities.max_cities,
        )?);

        let observation_cache = Arc::new(ObservationCache::new(
            config.cache.raw_ttl(),
            clock.clone(),
        ));
        let ranking_cache = Arc::new(RankingCache::new(config.cache.aggregate_ttl(), clock));

        let fetch_weather = Arc::new(
            FetchWeatherUseCase::new(provider, cities, observation_cache.clone())
                .with_max_concurrent(config.weather.max_concurrent_fetches),
        );
        let get_ranking = Arc::new(GetComfortRankingUseCase::new(
            fetch_weather.clone(),
            ranking_cache.clone(),
        ));
        let get_cache_status = Arc::new(GetCacheStatusUseCase::new(
            observation_cache,
            ranking_cache,
        ));

        info!(
            max_concurrent_fetches = config.weather.max_concurrent_fetches,
            "Services initialized"
        );

        Ok(Self {
            fetch_weather,
            get_ranking,
            get_cache_status,
        })
    }

    pub fn app_state(&self, config: &Config) -> AppState {
        AppState {
            fetch_weather: self.fetch_weather.clone(),
            get_ranking: self.get_ranking.clone(),
            get_cache_status: self.get_cache_status.clone(),
            api_token: config.server.api_token.as_deref().map(Arc::from),
        }
    }
}
