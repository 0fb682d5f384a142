use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Upstream request for city {city_id} failed: {reason}")]
    UpstreamRequest { city_id: String, reason: String },

    #[error("Upstream returned HTTP {status} for city {city_id}")]
    UpstreamStatus { city_id: String, status: u16 },

    #[error("Upstream request for city {0} timed out")]
    UpstreamTimeout(String),

    #[error("Invalid observation for city {city_id}: {reason}")]
    InvalidObservation { city_id: String, reason: String },

    #[error("City list unavailable: {0}")]
    CityListUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors scoped to a single city's fetch. These are absorbed by the
    /// weather fetcher and never reach the HTTP layer.
    pub fn is_per_city(&self) -> bool {
        matches!(
            self,
            DomainError::UpstreamRequest { .. }
                | DomainError::UpstreamStatus { .. }
                | DomainError::UpstreamTimeout(_)
                | DomainError::InvalidObservation { .. }
        )
    }
}
