//! Comfort index scoring and the ranked record built from it.
//!
//! - `score`: the pure four-factor scoring function
//! - `record`: the ranked, serializable per-city result

pub mod record;
pub mod score;

pub use record::{rank_records, ComfortRecord};
pub use score::{comfort_score, ComfortBreakdown};
