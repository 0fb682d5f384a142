use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque identifier of a monitored city (an OpenWeather city code).
///
/// Uses `Arc<str>` so the id can be cloned into every fetch task and cache
/// key without reallocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CityId(Arc<str>);

impl CityId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityId {
    fn from(value: &str) -> Self {
        Self::new(value.trim())
    }
}

impl From<String> for CityId {
    fn from(value: String) -> Self {
        Self::new(value.trim())
    }
}

impl From<u64> for CityId {
    fn from(value: u64) -> Self {
        Self::new(value.to_string())
    }
}

/// City codes show up both as `"1248991"` and `1248991` in source documents.
impl<'de> Deserialize<'de> for CityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCityId {
            Text(String),
            Number(u64),
        }

        match RawCityId::deserialize(deserializer)? {
            RawCityId::Text(s) if s.trim().is_empty() => {
                Err(serde::de::Error::custom("city id cannot be empty"))
            }
            RawCityId::Text(s) => Ok(CityId::from(s)),
            RawCityId::Number(n) => Ok(CityId::from(n)),
        }
    }
}
