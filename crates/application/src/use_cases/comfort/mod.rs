mod get_ranking;

pub use get_ranking::{rank_observations, GetComfortRankingUseCase};
