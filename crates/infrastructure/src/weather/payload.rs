use comfort_index_domain::{CityId, DomainError, Observation};
use serde::Deserialize;

/// OpenWeather "current weather" response, as far as this service reads it.
///
/// Every section is optional on the wire. `into_observation` is the single
/// place where missing values are defaulted or rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<MainSection>,
    #[serde(default)]
    pub wind: Option<WindSection>,
    #[serde(default)]
    pub clouds: Option<CloudSection>,
    #[serde(default)]
    pub weather: Vec<ConditionSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainSection {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindSection {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudSection {
    pub all: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSection {
    pub description: Option<String>,
    pub main: Option<String>,
    pub icon: Option<String>,
}

impl CurrentWeatherResponse {
    /// Normalizes the payload.
    ///
    /// Temperature and humidity are required. Wind speed and cloudiness
    /// default to 0, text fields to empty, the display name to the city id.
    /// Percentages are rounded and clamped to 0..=100; wind is floored at 0.
    pub fn into_observation(self, city_id: &CityId) -> Result<Observation, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidObservation {
            city_id: city_id.to_string(),
            reason: reason.to_string(),
        };

        let main = self.main.ok_or_else(|| invalid("missing main section"))?;
        let temperature = main
            .temp
            .filter(|t| t.is_finite())
            .ok_or_else(|| invalid("missing or non-finite main.temp"))?;
        let humidity = main
            .humidity
            .filter(|h| h.is_finite())
            .ok_or_else(|| invalid("missing or non-finite main.humidity"))?;
        let feels_like = main
            .feels_like
            .filter(|f| f.is_finite())
            .unwrap_or(temperature);

        let wind_speed = self.wind.and_then(|w| w.speed).unwrap_or(0.0);
        if !wind_speed.is_finite() {
            return Err(invalid("non-finite wind.speed"));
        }

        let cloudiness = self.clouds.and_then(|c| c.all).unwrap_or(0.0);
        if !cloudiness.is_finite() {
            return Err(invalid("non-finite clouds.all"));
        }

        let condition = self.weather.into_iter().next();
        let (weather, weather_main, icon) = match condition {
            Some(c) => (
                c.description.unwrap_or_default(),
                c.main.unwrap_or_default(),
                c.icon.unwrap_or_default(),
            ),
            None => Default::default(),
        };

        let city = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| city_id.to_string());

        Ok(Observation {
            city_id: city_id.clone(),
            city,
            temperature,
            feels_like,
            humidity: percent(humidity),
            wind_speed: wind_speed.max(0.0),
            cloudiness: percent(cloudiness),
            weather,
            weather_main,
            icon,
        })
    }
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
