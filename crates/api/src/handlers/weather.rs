use crate::{
    dto::{ErrorResponse, WeatherResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, instrument};

pub const WEATHER_ERROR_MESSAGE: &str = "Error fetching weather data";

/// Raw observations for every monitored city, read through the per-city
/// cache only. The aggregate ranking cache is not consulted.
#[instrument(skip(state), name = "api_get_weather")]
pub async fn get_weather(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match state.fetch_weather.execute().await {
        Ok(observations) => {
            debug!(count = observations.len(), "Weather observations retrieved");
            Ok(Json(
                observations.iter().map(WeatherResponse::from).collect(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch weather data");
            Err(ErrorResponse::internal(WEATHER_ERROR_MESSAGE))
        }
    }
}
