pub mod context;
pub mod handicap;
pub mod score_aggregators;
pub mod sort_utils;
pub mod stableford;

pub use context::compute_leaderboard;
pub use handicap::{compute_course_handicap, course_handicaps, strokes_on_hole};
pub use score_aggregators::aggregate_scores;
pub use sort_utils::rank_entrants;
pub use stableford::{StablefordBucket, StablefordConfig, parse_stableford_config};
