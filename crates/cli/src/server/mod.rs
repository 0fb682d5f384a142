pub mod web;

pub use web::{build_router, spawn_shutdown_listener, start_web_server};
