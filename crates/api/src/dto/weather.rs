use comfort_index_domain::Observation;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub city_id: String,
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub cloudiness: u8,
    pub weather: String,
    pub weather_main: String,
    pub icon: String,
}

impl From<&Observation> for WeatherResponse {
    fn from(observation: &Observation) -> Self {
        Self {
            city_id: observation.city_id.to_string(),
            city: observation.city.clone(),
            temperature: observation.temperature,
            feels_like: observation.feels_like,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed,
            cloudiness: observation.cloudiness,
            weather: observation.weather.clone(),
            weather_main: observation.weather_main.clone(),
            icon: observation.icon.clone(),
        }
    }
}
