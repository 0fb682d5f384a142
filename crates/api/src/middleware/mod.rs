mod auth;

pub use auth::{bearer_token, require_bearer_token, timing_safe_eq, UNAUTHORIZED_MESSAGE};
