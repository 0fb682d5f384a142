use crate::{dto::CacheStatusResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_status")]
pub async fn get_cache_status(State(state): State<AppState>) -> Json<CacheStatusResponse> {
    let status = state.get_cache_status.execute();

    debug!(
        raw_entries = status.observations.size,
        raw_hits = status.observations.hits,
        raw_misses = status.observations.misses,
        ranking_valid = status.ranking.is_valid,
        "Cache status retrieved"
    );

    Json(CacheStatusResponse::from(status))
}
