//! Comfort Index Domain Layer
pub mod cache_entry;
pub mod city;
pub mod comfort;
pub mod config;
pub mod errors;
pub mod observation;

pub use cache_entry::CacheEntry;
pub use city::CityId;
pub use comfort::{comfort_score, rank_records, ComfortRecord};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use observation::Observation;
