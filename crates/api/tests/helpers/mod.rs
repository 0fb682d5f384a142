#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use chrono::Duration;
use comfort_index_api::{create_api_routes, AppState};
use comfort_index_application::ports::{CityListProvider, Clock, WeatherProvider};
use comfort_index_application::services::{ObservationCache, RankingCache};
use comfort_index_application::use_cases::{
    FetchWeatherUseCase, GetCacheStatusUseCase, GetComfortRankingUseCase,
};
use comfort_index_domain::{CityId, DomainError, Observation};
use http_body_util::BodyExt;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::Utc::now()
    }
}

pub struct StubProvider {
    observations: HashMap<CityId, Observation>,
    failing: HashSet<CityId>,
    pub calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(observations: Vec<Observation>, failing: &[&str]) -> Self {
        Self {
            observations: observations
                .into_iter()
                .map(|o| (o.city_id.clone(), o))
                .collect(),
            failing: failing.iter().map(|id| CityId::from(*id)).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn fetch(&self, city_id: &CityId) -> Result<Observation, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(city_id) {
            return Err(DomainError::UpstreamRequest {
                city_id: city_id.to_string(),
                reason: "connection reset by upstream 10.0.0.7".to_string(),
            });
        }
        self.observations
            .get(city_id)
            .cloned()
            .ok_or_else(|| DomainError::UpstreamStatus {
                city_id: city_id.to_string(),
                status: 404,
            })
    }
}

pub struct StubCities(pub Option<Vec<CityId>>);

#[async_trait]
impl CityListProvider for StubCities {
    async fn city_ids(&self) -> Result<Vec<CityId>, DomainError> {
        self.0
            .clone()
            .ok_or_else(|| DomainError::CityListUnavailable("/etc/cities.json: denied".to_string()))
    }
}

pub fn observation(
    id: &str,
    name: &str,
    temperature: f64,
    humidity: u8,
    wind: f64,
    clouds: u8,
) -> Observation {
    Observation::with_conditions(id, temperature, humidity, wind, clouds)
        .named(name)
        .described("clear sky")
}

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<StubProvider>,
}

pub fn build_app(
    provider: StubProvider,
    cities: Option<Vec<&str>>,
    api_token: Option<&str>,
) -> TestApp {
    let provider = Arc::new(provider);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let observation_cache = Arc::new(ObservationCache::new(Duration::minutes(5), clock.clone()));
    let ranking_cache = Arc::new(RankingCache::new(Duration::minutes(5), clock));
    let city_list = StubCities(cities.map(|ids| ids.iter().map(|id| CityId::from(*id)).collect()));

    let fetch_weather = Arc::new(FetchWeatherUseCase::new(
        provider.clone(),
        Arc::new(city_list),
        observation_cache.clone(),
    ));
    let state = AppState {
        get_ranking: Arc::new(GetComfortRankingUseCase::new(
            fetch_weather.clone(),
            ranking_cache.clone(),
        )),
        get_cache_status: Arc::new(GetCacheStatusUseCase::new(
            observation_cache,
            ranking_cache,
        )),
        fetch_weather,
        api_token: api_token.map(Arc::from),
    };

    TestApp {
        router: Router::new().nest("/api", create_api_routes(state)),
        provider,
    }
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> (u16, serde_json::Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {token}"));
    }
    let response = router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
