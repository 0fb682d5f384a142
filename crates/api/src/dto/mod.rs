pub mod cache;
pub mod comfort;
pub mod error;
pub mod weather;

pub use cache::{CacheStatusResponse, ProcessedCacheResponse, RawCacheResponse};
pub use comfort::ComfortIndexResponse;
pub use error::ErrorResponse;
pub use weather::WeatherResponse;
