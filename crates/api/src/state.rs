use comfort_index_application::use_cases::{
    FetchWeatherUseCase, GetCacheStatusUseCase, GetComfortRankingUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fetch_weather: Arc<FetchWeatherUseCase>,
    pub get_ranking: Arc<GetComfortRankingUseCase>,
    pub get_cache_status: Arc<GetCacheStatusUseCase>,
    /// Bearer token guarding the comfort index route. `None` leaves it open.
    pub api_token: Option<Arc<str>>,
}
