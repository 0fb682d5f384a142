pub mod cache;
pub mod comfort;
pub mod weather;

// Re-export use cases
pub use cache::{CacheStatus, GetCacheStatusUseCase};
pub use comfort::GetComfortRankingUseCase;
pub use weather::FetchWeatherUseCase;
