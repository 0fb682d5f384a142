use async_trait::async_trait;
use comfort_index_application::ports::CityListProvider;
use comfort_index_domain::{CityId, DomainError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// `{"List": [{"CityCode": "1248991", "CityName": "Colombo", ...}, ...]}`
#[derive(Debug, Deserialize)]
struct CityListDocument {
    #[serde(rename = "List")]
    list: Vec<CityEntry>,
}

#[derive(Debug, Deserialize)]
struct CityEntry {
    #[serde(rename = "CityCode")]
    city_code: CityId,
}

/// City list read once from a JSON document at startup.
///
/// Keeps document order, drops repeated codes and truncates to `max_cities`.
pub struct JsonCityListProvider {
    city_ids: Vec<CityId>,
}

impl JsonCityListProvider {
    pub fn from_path(path: impl AsRef<Path>, max_cities: usize) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::CityListUnavailable(format!("{}: {e}", path.display()))
        })?;
        let provider = Self::from_json(&content, max_cities)?;

        info!(
            path = %path.display(),
            cities = provider.city_ids.len(),
            "City list loaded"
        );
        Ok(provider)
    }

    pub fn from_json(content: &str, max_cities: usize) -> Result<Self, DomainError> {
        let document: CityListDocument = serde_json::from_str(content)
            .map_err(|e| DomainError::CityListUnavailable(format!("invalid city list: {e}")))?;

        let mut seen = HashSet::new();
        let city_ids: Vec<CityId> = document
            .list
            .into_iter()
            .map(|entry| entry.city_code)
            .filter(|id| seen.insert(id.clone()))
            .take(max_cities)
            .collect();

        if city_ids.is_empty() {
            return Err(DomainError::CityListUnavailable(
                "city list contains no cities".to_string(),
            ));
        }

        Ok(Self { city_ids })
    }

    pub fn ids(&self) -> &[CityId] {
        &self.city_ids
    }
}

#[async_trait]
impl CityListProvider for JsonCityListProvider {
    async fn city_ids(&self) -> Result<Vec<CityId>, DomainError> {
        Ok(self.city_ids.clone())
    }
}
