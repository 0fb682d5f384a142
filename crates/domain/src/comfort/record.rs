use crate::Observation;

use super::comfort_score;

/// Scored and ranked view of one city's observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortRecord {
    pub city: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather: String,
    pub comfort_index: u8,
    /// 1-based; zero until the record has been placed in a ranking.
    pub rank: u32,
}

impl ComfortRecord {
    /// Scores an observation. The rank is assigned later, after sorting.
    pub fn from_observation(observation: &Observation) -> Self {
        Self {
            city: observation.city.clone(),
            temperature: observation.temperature,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed,
            weather: observation.weather.clone(),
            comfort_index: comfort_score(observation),
            rank: 0,
        }
    }
}

/// Sorts by comfort index descending and assigns contiguous 1-based ranks.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank_records(mut records: Vec<ComfortRecord>) -> Vec<ComfortRecord> {
    records.sort_by(|a, b| b.comfort_index.cmp(&a.comfort_index));
    for (position, record) in records.iter_mut().enumerate() {
        record.rank = position as u32 + 1;
    }
    records
}
