use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Generic error body. Never carries upstream detail.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self {
                message: message.to_string(),
            }),
        )
    }

    pub fn unauthorized(message: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::UNAUTHORIZED,
            Json(Self {
                message: message.to_string(),
            }),
        )
    }
}
