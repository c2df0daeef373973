pub mod args;
pub mod error;
pub mod model;
pub mod score;
pub mod controller {
    pub mod leaderboard;
}

pub use error::ScoringError;
pub use model::{Leaderboard, LeaderboardEntry, ScoringFormat, TournamentSnapshot};
pub use score::compute_leaderboard;
