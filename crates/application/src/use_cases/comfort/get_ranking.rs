use comfort_index_domain::{rank_records, ComfortRecord, DomainError, Observation};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::services::ranking_cache::Ranking;
use crate::services::RankingCache;
use crate::use_cases::FetchWeatherUseCase;

/// Ranking aggregator: scores every monitored city and serves the ranked
/// list from the aggregate cache while it is fresh.
///
/// Recomputation is single-flight. Callers that miss while a refresh is in
/// progress wait for it and reuse its result instead of fetching again.
pub struct GetComfortRankingUseCase {
    fetch_weather: Arc<FetchWeatherUseCase>,
    cache: Arc<RankingCache>,
    refresh: Mutex<()>,
}

impl GetComfortRankingUseCase {
    pub fn new(fetch_weather: Arc<FetchWeatherUseCase>, cache: Arc<RankingCache>) -> Self {
        Self {
            fetch_weather,
            cache,
            refresh: Mutex::new(()),
        }
    }

    /// Returns the ranked comfort list, most comfortable first.
    ///
    /// # Errors
    ///
    /// Propagates failures of the control path (city list unavailable).
    /// Nothing is cached when this returns `Err`. An upstream outage for
    /// every city yields `Ok` with an empty ranking.
    #[instrument(skip(self), name = "get_comfort_ranking")]
    pub async fn execute(&self) -> Result<Ranking, DomainError> {
        if let Some(ranking) = self.cache.get() {
            self.cache.counters().record_hit();
            debug!(cities = ranking.len(), "Comfort ranking cache hit");
            return Ok(ranking);
        }
        self.cache.counters().record_miss();

        let _guard = self.refresh.lock().await;
        if let Some(ranking) = self.cache.get() {
            debug!("Comfort ranking refreshed by a concurrent request");
            return Ok(ranking);
        }

        let observations = self.fetch_weather.execute().await?;
        let ranking = self.cache.store(rank_observations(&observations));

        info!(
            cities = ranking.len(),
            top = ranking.first().map(|r| r.city.as_str()).unwrap_or("-"),
            "Comfort ranking recomputed"
        );
        Ok(ranking)
    }
}

/// Scores each observation and ranks the result. Ties keep the order the
/// observations were given in.
pub fn rank_observations(observations: &[Observation]) -> Vec<ComfortRecord> {
    rank_records(
        observations
            .iter()
            .map(ComfortRecord::from_observation)
            .collect(),
    )
}
