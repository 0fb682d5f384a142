//! Configuration module for the comfort index service
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: HTTP binding, CORS and the optional bearer token
//! - `weather`: Upstream weather provider settings
//! - `cities`: City list source
//! - `cache`: Raw and aggregate cache TTLs
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod cities;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod weather;

pub use cache::CacheConfig;
pub use cities::CitiesConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use weather::WeatherConfig;
