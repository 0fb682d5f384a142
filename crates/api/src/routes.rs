use crate::handlers;
use crate::middleware::require_bearer_token;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Creates all API routes with state. Mounted under `/api` by the server.
pub fn create_api_routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/weather/comfortindex", get(handlers::get_comfort_index))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/weather", get(handlers::get_weather))
        .route("/cache-status", get(handlers::get_cache_status))
        .merge(protected)
        .with_state(state)
}
