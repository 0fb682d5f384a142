use crate::{dto::ErrorResponse, state::AppState};
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tracing::warn;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Constant-time comparison for secrets of possibly different lengths.
pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Pass-through when no token is configured; otherwise the request must
/// present the configured bearer token.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.api_token.as_deref() else {
        return next.run(request).await;
    };

    let rejection = match bearer_token(request.headers()) {
        Some(token) if timing_safe_eq(token.as_bytes(), expected.as_bytes()) => None,
        Some(_) => Some("invalid bearer token"),
        None => Some("missing bearer token"),
    };

    match rejection {
        None => next.run(request).await,
        Some(reason) => {
            warn!(path = %request.uri().path(), reason, "Rejected unauthenticated request");
            ErrorResponse::unauthorized(UNAUTHORIZED_MESSAGE).into_response()
        }
    }
}
