use serde::{Deserialize, Serialize};

/// Upstream weather provider configuration (OpenWeather current weather API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    /// API key sent as `appid`. Usually supplied through `OPENWEATHER_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the provider (default: "https://api.openweathermap.org")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of cities fetched at once. 0 means unbounded (default: 0)
    #[serde(default)]
    pub max_concurrent_fetches: usize,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_fetches: 0,
        }
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}
