use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::MAX_TTL_SECS;
use super::{CacheConfig, CitiesConfig, ConfigError, LoggingConfig, ServerConfig, WeatherConfig};

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const API_TOKEN_ENV: &str = "API_TOKEN";
pub const FRONTEND_URL_ENV: &str = "FRONTEND_URL";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub cities: CitiesConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line. They win over the file and the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub cities_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the TOML file (if any), then applies environment variables,
    /// then CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Environment lookups are injected so tests do not touch the process env.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.weather.api_key = key;
        }
        if let Some(token) = lookup(API_TOKEN_ENV).filter(|v| !v.is_empty()) {
            self.server.api_token = Some(token);
        }
        if let Some(origin) = lookup(FRONTEND_URL_ENV).filter(|v| !v.is_empty()) {
            self.server.cors_allowed_origins = vec![origin];
        }
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.cities_path {
            self.cities.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than zero".to_string(),
            ));
        }
        if self.weather.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "weather.api_key is empty (set it in the config file or {API_KEY_ENV})"
            )));
        }
        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "weather.base_url must start with http:// or https://".to_string(),
            ));
        }
        if self.weather.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "weather.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.cities.max_cities == 0 {
            return Err(ConfigError::Validation(
                "cities.max_cities must be greater than zero".to_string(),
            ));
        }
        for (name, ttl) in [
            ("cache.raw_ttl_secs", self.cache.raw_ttl_secs),
            ("cache.aggregate_ttl_secs", self.cache.aggregate_ttl_secs),
        ] {
            if ttl == 0 || ttl > MAX_TTL_SECS {
                return Err(ConfigError::Validation(format!(
                    "{name} must be between 1 and {MAX_TTL_SECS}"
                )));
            }
        }
        if let Some(token) = &self.server.api_token {
            if token.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "server.api_token cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}
