pub mod cache;
pub mod comfort;
pub mod health;
pub mod weather;

pub use cache::get_cache_status;
pub use comfort::get_comfort_index;
pub use health::health_check;
pub use weather::get_weather;
