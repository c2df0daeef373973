pub mod entrant;
pub mod format;
pub mod hole;
pub mod score;
pub mod snapshot;
pub mod types;

pub use entrant::{Entrant, EntrantId, Group, GroupStatus, Player};
pub use format::ScoringFormat;
pub use hole::Hole;
pub use score::{HoleScore, ScoreDisplay, ScoreRecord};
pub use snapshot::{CourseRating, TournamentSnapshot};
pub use types::{EntrantAggregate, Leaderboard, LeaderboardEntry};
