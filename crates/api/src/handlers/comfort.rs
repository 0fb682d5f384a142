use crate::{
    dto::{ComfortIndexResponse, ErrorResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, instrument};

pub const COMFORT_ERROR_MESSAGE: &str = "Error calculating comfort index";

#[instrument(skip(state), name = "api_get_comfort_index")]
pub async fn get_comfort_index(
    State(state): State<AppState>,
) -> Result<Json<Vec<ComfortIndexResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match state.get_ranking.execute().await {
        Ok(ranking) => {
            debug!(count = ranking.len(), "Comfort ranking retrieved");
            Ok(Json(
                ranking.iter().map(ComfortIndexResponse::from).collect(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Failed to calculate comfort index");
            Err(ErrorResponse::internal(COMFORT_ERROR_MESSAGE))
        }
    }
}
