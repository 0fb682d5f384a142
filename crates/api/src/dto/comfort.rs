use comfort_index_domain::ComfortRecord;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComfortIndexResponse {
    pub city: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: String,
    pub comfort_index: u8,
    pub rank: u32,
}

impl From<&ComfortRecord> for ComfortIndexResponse {
    fn from(record: &ComfortRecord) -> Self {
        Self {
            city: record.city.clone(),
            temperature: record.temperature,
            humidity: record.humidity,
            wind_speed: record.wind_speed,
            weather: record.weather.clone(),
            comfort_index: record.comfort_index,
            rank: record.rank,
        }
    }
}
