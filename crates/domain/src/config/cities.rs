use serde::{Deserialize, Serialize};

/// City list source
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CitiesConfig {
    /// Path to the city list JSON document (default: "./cities.json")
    #[serde(default = "default_cities_path")]
    pub path: String,

    /// Number of cities taken from the head of the list (default: 10)
    #[serde(default = "default_max_cities")]
    pub max_cities: usize,
}

impl Default for CitiesConfig {
    fn default() -> Self {
        Self {
            path: default_cities_path(),
            max_cities: default_max_cities(),
        }
    }
}

fn default_cities_path() -> String {
    "./cities.json".to_string()
}

fn default_max_cities() -> usize {
    10
}
