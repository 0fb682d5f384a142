use crate::CityId;

/// Weather snapshot for one city, normalized at the fetch boundary.
///
/// Every field is populated; defaults for fields the upstream omitted are
/// applied once by the provider, so scoring and serialization never see
/// partial data.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub city_id: CityId,
    /// Display name as reported by the upstream.
    pub city: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub feels_like: f64,
    /// Percent, 0..=100.
    pub humidity: u8,
    /// Metres per second, never negative.
    pub wind_speed: f64,
    /// Percent, 0..=100.
    pub cloudiness: u8,
    /// Short description, e.g. "scattered clouds".
    pub weather: String,
    /// Weather group, e.g. "Clouds".
    pub weather_main: String,
    pub icon: String,
}

impl Observation {
    /// Builds an observation carrying only the attributes the comfort score
    /// reads. Text fields are left empty.
    pub fn with_conditions(
        city_id: impl Into<CityId>,
        temperature: f64,
        humidity: u8,
        wind_speed: f64,
        cloudiness: u8,
    ) -> Self {
        let city_id = city_id.into();
        Self {
            city: city_id.to_string(),
            city_id,
            temperature,
            feels_like: temperature,
            humidity: humidity.min(100),
            wind_speed: wind_speed.max(0.0),
            cloudiness: cloudiness.min(100),
            weather: String::new(),
            weather_main: String::new(),
            icon: String::new(),
        }
    }

    pub fn named(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn described(mut self, weather: impl Into<String>) -> Self {
        self.weather = weather.into();
        self
    }
}
