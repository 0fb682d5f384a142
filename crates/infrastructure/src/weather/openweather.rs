use super::CurrentWeatherResponse;
use async_trait::async_trait;
use comfort_index_application::ports::WeatherProvider;
use comfort_index_domain::config::WeatherConfig;
use comfort_index_domain::{CityId, DomainError, Observation};
use std::time::Duration;
use tracing::debug;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
/// Scoring assumes degrees Celsius and metres per second.
const UNITS: &str = "metric";

/// OpenWeather current-weather client, one request per city id.
///
/// The request timeout is the only bound on a slow upstream; a city that
/// times out is reported as [`DomainError::UpstreamTimeout`].
pub struct OpenWeatherClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::IoError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                CURRENT_WEATHER_PATH
            ),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_error(city_id: &CityId, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::UpstreamTimeout(city_id.to_string())
        } else {
            DomainError::UpstreamRequest {
                city_id: city_id.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city_id: &CityId) -> Result<Observation, DomainError> {
        debug!(city_id = %city_id, "Requesting current weather");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("id", city_id.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|e| Self::request_error(city_id, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus {
                city_id: city_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::request_error(city_id, e))?;

        let payload: CurrentWeatherResponse =
            serde_json::from_slice(&body).map_err(|e| DomainError::InvalidObservation {
                city_id: city_id.to_string(),
                reason: format!("undecodable body: {e}"),
            })?;

        let observation = payload.into_observation(city_id)?;
        debug!(
            city_id = %city_id,
            city = %observation.city,
            temperature = observation.temperature,
            "Current weather received"
        );
        Ok(observation)
    }

    fn provider_name(&self) -> &'static str {
        "openweather"
    }
}
